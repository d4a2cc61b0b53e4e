use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name to human-readable message, as supplied by the backend's
/// `details` map on 400/409 responses.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Internal error")]
    InternalError(#[from] anyhow::Error),
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Session expired")]
    SessionExpired,
    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<FieldErrors>,
}

impl ApiError {
    /// Maps a non-success response to the client-side error taxonomy.
    ///
    /// 401 means the caller was not (or no longer) authenticated. A 400/409
    /// body carrying a `details` map becomes field-level messages;
    /// everything else collapses to a single message with the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthenticated;
        }
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        if matches!(status, 400 | 409) {
            if let Some(details) = parsed.details.filter(|details| !details.is_empty()) {
                return ApiError::Validation(details);
            }
        }
        let message = parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| "Unexpected server error".to_string());
        ApiError::Server { status, message }
    }
}
