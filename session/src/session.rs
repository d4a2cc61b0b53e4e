use crate::authorized::{decode, join_endpoint};
use crate::config::SETTINGS_CONFIG;
use crate::data::{AuthResponse, Credentials, RefreshResponse, RegisterInput, User};
use crate::errors::ApiError;
use crate::store::{SessionStore, TOKEN_KEY, USER_KEY};
use anyhow::Context;
use reqwest::Method;
use secrecy::Secret;
use serde::de::DeserializeOwned;
use shared_kernel::http_client::HttpClient;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use url::Url;

/// Cheaply cloneable handle on the authenticated session.
///
/// The session is either unauthenticated (no token, no user) or
/// authenticated (both persisted, user published on the stream). Login and
/// registration move it to authenticated; explicit logout or an
/// unrecoverable refresh failure move it back.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

struct Inner {
    api_host: Url,
    store: Box<dyn SessionStore>,
    current_user: watch::Sender<Option<User>>,
    // Single-flight gate: at most one token refresh in flight. Waiters
    // joining behind it reuse the token the winner stored.
    refresh_gate: Mutex<()>,
}

impl Session {
    /// Builds a session over the given store, restoring any persisted
    /// state. Restoration is best-effort: a stored user record that no
    /// longer parses clears both keys and leaves the session logged out.
    pub fn new(api_host: Url, store: Box<dyn SessionStore>) -> Self {
        let restored = restore(store.as_ref());
        let (current_user, _) = watch::channel(restored);
        Session {
            inner: Arc::new(Inner {
                api_host,
                store,
                current_user,
                refresh_gate: Mutex::new(()),
            }),
        }
    }

    pub fn from_config(store: Box<dyn SessionStore>) -> anyhow::Result<Self> {
        let host = Url::parse(&SETTINGS_CONFIG.api.host)
            .with_context(|| format!("Invalid api host {}", SETTINGS_CONFIG.api.host))?;
        Ok(Self::new(host, store))
    }

    #[tracing::instrument(err, skip_all, level = "info")]
    pub async fn login(&self, credentials: Credentials) -> Result<User, ApiError> {
        let body = serde_json::to_value(&credentials).context("Failed to serialize credentials")?;
        let response: AuthResponse = self.post_auth("auth/login", body).await?;
        self.install(response.user.clone(), &response.token);
        Ok(response.user)
    }

    #[tracing::instrument(err, skip_all, level = "info")]
    pub async fn register(&self, input: RegisterInput) -> Result<User, ApiError> {
        let body = serde_json::to_value(&input).context("Failed to serialize registration")?;
        let response: AuthResponse = self.post_auth("auth/register", body).await?;
        self.install(response.user.clone(), &response.token);
        Ok(response.user)
    }

    pub fn logout(&self) {
        self.inner.store.remove(TOKEN_KEY);
        self.inner.store.remove(USER_KEY);
        self.inner.current_user.send_replace(None);
    }

    pub fn token(&self) -> Option<Secret<String>> {
        self.token_string().map(Secret::new)
    }

    pub(crate) fn token_string(&self) -> Option<String> {
        self.inner.store.read(TOKEN_KEY)
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.current_user.borrow().clone()
    }

    /// Stream of the current user; `None` marks the unauthenticated state.
    /// Delivery is synchronous with the state change that produced it.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.inner.current_user.subscribe()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token_string().is_some() && self.current_user().is_some()
    }

    pub fn is_coordinator_or_admin(&self) -> bool {
        self.current_user()
            .map(|user| user.is_coordinator_or_admin())
            .unwrap_or(false)
    }

    /// Refreshes the bearer token after a request failed with 401.
    ///
    /// `stale_token` is the token the failed request carried. Exactly one
    /// refresh round-trip is issued per stale token: concurrent callers
    /// queue on the gate and, once through, find a token that differs from
    /// their stale one and reuse it. A refresh that fails (or answers
    /// without a token) forces a logout.
    #[tracing::instrument(err, skip_all, level = "info")]
    pub async fn refresh_after_unauthorized(&self, stale_token: &str) -> Result<String, ApiError> {
        let _guard = self.inner.refresh_gate.lock().await;
        if let Some(current) = self.token_string() {
            if current != stale_token {
                return Ok(current);
            }
        }

        let outcome: Result<RefreshResponse, ApiError> =
            self.post_auth("auth/refresh", serde_json::json!({})).await;
        match outcome.ok().and_then(RefreshResponse::into_token) {
            Some(token) => {
                self.inner.store.write(TOKEN_KEY, &token);
                Ok(token)
            }
            None => {
                self.logout();
                Err(ApiError::SessionExpired)
            }
        }
    }

    fn install(&self, user: User, token: &str) {
        self.inner.store.write(TOKEN_KEY, token);
        match serde_json::to_string(&user) {
            Ok(serialized) => self.inner.store.write(USER_KEY, &serialized),
            Err(error) => tracing::error!("Failed to serialize user for storage: {error}"),
        }
        self.inner.current_user.send_replace(Some(user));
    }

    async fn post_auth<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        let url = join_endpoint(&self.inner.api_host, path)?;
        let response = HttpClient::request(Method::POST, url.clone())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;
        decode(response).await
    }
}

fn restore(store: &dyn SessionStore) -> Option<User> {
    store.read(TOKEN_KEY)?;
    let raw_user = store.read(USER_KEY)?;
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Some(user),
        Err(error) => {
            tracing::error!("Discarding unreadable stored session: {error}");
            store.remove(TOKEN_KEY);
            store.remove(USER_KEY);
            None
        }
    }
}
