use crate::contracts::{MessageResponse, ReportSubsystem};
use serde::Serialize;
use session::ApiError;
use shared_kernel::entity_ids::ReportId;

#[derive(Debug, Serialize)]
pub struct EmailRequest {
    pub recipients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ReportSubsystem {
    /// Asks the backend to mail the report; it answers with a
    /// confirmation message.
    #[tracing::instrument(err, skip(self, request), level = "info")]
    pub async fn send_report_email(
        &self,
        id: &ReportId,
        request: &EmailRequest,
    ) -> Result<String, ApiError> {
        let url = self.api().endpoint(&format!("reports/{id}/send-email"))?;
        let response: MessageResponse = self.api().post_json(url, request).await?;
        Ok(response.message)
    }
}
