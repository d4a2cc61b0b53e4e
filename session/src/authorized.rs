use crate::errors::ApiError;
use crate::session::Session;
use anyhow::Context;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_kernel::http_client::HttpClient;
use url::Url;

/// Request wrapper that attaches the session's bearer token and performs
/// the one-shot refresh-and-retry on 401.
///
/// A 401 on a request that carried no token, and every non-401 error
/// status, surface unchanged. Refresh requests themselves are never
/// retried, so a refresh rejection cannot recurse.
#[derive(Clone)]
pub struct AuthorizedApi {
    api_host: Url,
    session: Session,
}

impl AuthorizedApi {
    pub fn new(api_host: Url, session: Session) -> Self {
        AuthorizedApi { api_host, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        join_endpoint(&self.api_host, path)
    }

    pub fn endpoint_with(&self, path: &str, params: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = join_endpoint(&self.api_host, path)?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.execute(Method::GET, url, None).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).context("Failed to serialize request body")?;
        self.execute(Method::POST, url, Some(body)).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).context("Failed to serialize request body")?;
        self.execute(Method::PUT, url, Some(body)).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).context("Failed to serialize request body")?;
        self.execute(Method::PATCH, url, Some(body)).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.execute(Method::DELETE, url, None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let token = self.session.token_string();
        let response = send(method.clone(), url.clone(), body.as_ref(), token.as_deref()).await?;

        if response.status().as_u16() == 401 && !is_refresh_call(&url) {
            if let Some(stale) = token {
                let fresh = self.session.refresh_after_unauthorized(&stale).await?;
                let retried = send(method, url, body.as_ref(), Some(&fresh)).await?;
                return decode(retried).await;
            }
        }
        decode(response).await
    }
}

fn is_refresh_call(url: &Url) -> bool {
    url.path().ends_with("/auth/refresh")
}

pub(crate) fn join_endpoint(base: &Url, path: &str) -> Result<Url, ApiError> {
    let raw = format!("{}/{}", base.as_str().trim_end_matches('/'), path);
    Url::parse(&raw)
        .with_context(|| format!("Failed to parse url {raw}"))
        .map_err(ApiError::from)
}

async fn send(
    method: Method,
    url: Url,
    body: Option<&Value>,
    token: Option<&str>,
) -> Result<reqwest::Response, ApiError> {
    let mut request = HttpClient::request(method, url.clone());
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(body) = body {
        request = request.json(body);
    }
    request
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))
        .map_err(ApiError::from)
}

pub(crate) async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        let err_msg = format!("Failed to deserialize response with status {status}");
        return response.json::<T>().await.context(err_msg).map_err(ApiError::from);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemorySessionStore, SessionStore, TOKEN_KEY, USER_KEY};
    use httpmock::prelude::*;
    use serde_json::json;

    fn seeded_store(token: &str) -> MemorySessionStore {
        let store = MemorySessionStore::new();
        store.write(TOKEN_KEY, token);
        store.write(
            USER_KEY,
            &json!({
                "id": "user-1",
                "firstName": "Claire",
                "lastName": "Moreau",
                "email": "claire@entraide-bordeaux.fr",
                "role": "volunteer",
                "isActive": true,
                "associationId": "assoc-1"
            })
            .to_string(),
        );
        store
    }

    fn api_against(server: &MockServer, store: MemorySessionStore) -> AuthorizedApi {
        let host = Url::parse(&server.url("/api")).unwrap();
        let session = Session::new(host.clone(), Box::new(store));
        AuthorizedApi::new(host, session)
    }

    #[tokio::test]
    async fn concurrent_unauthorized_requests_coalesce_into_one_refresh() {
        let server = MockServer::start();
        let stale = server.mock(|when, then| {
            when.method(GET)
                .path("/api/maraudes")
                .header("authorization", "Bearer stale-token");
            then.status(401).json_body(json!({"error": "Token expiré"}));
        });
        let fresh = server.mock(|when, then| {
            when.method(GET)
                .path("/api/maraudes")
                .header("authorization", "Bearer fresh-token");
            then.status(200).json_body(json!({"actions": []}));
        });
        let refresh = server.mock(|when, then| {
            when.method(POST).path("/api/auth/refresh");
            then.status(200).json_body(json!({"token": "fresh-token"}));
        });

        let api = api_against(&server, seeded_store("stale-token"));
        let url = api.endpoint("maraudes").unwrap();

        let (a, b, c) = tokio::join!(
            api.get_json::<serde_json::Value>(url.clone()),
            api.get_json::<serde_json::Value>(url.clone()),
            api.get_json::<serde_json::Value>(url.clone()),
        );

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        refresh.assert_hits(1);
        stale.assert_hits(3);
        fresh.assert_hits(3);
        assert_eq!(
            api.session().token_string().as_deref(),
            Some("fresh-token")
        );
    }

    #[tokio::test]
    async fn refresh_failure_forces_logout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/maraudes");
            then.status(401).json_body(json!({"error": "Token expiré"}));
        });
        let refresh = server.mock(|when, then| {
            when.method(POST).path("/api/auth/refresh");
            then.status(401)
                .json_body(json!({"error": "Refresh token invalide"}));
        });

        let api = api_against(&server, seeded_store("stale-token"));
        let stream = api.session().subscribe();
        let url = api.endpoint("maraudes").unwrap();
        let result = api.get_json::<serde_json::Value>(url).await;

        assert!(matches!(result, Err(ApiError::SessionExpired)));
        refresh.assert_hits(1);
        assert!(api.session().token_string().is_none());
        assert!(stream.borrow().is_none());
    }

    #[tokio::test]
    async fn refresh_answer_without_token_forces_logout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/maraudes");
            then.status(401).json_body(json!({"error": "Token expiré"}));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/refresh");
            then.status(200).json_body(json!({"message": "ok"}));
        });

        let api = api_against(&server, seeded_store("stale-token"));
        let url = api.endpoint("maraudes").unwrap();
        let result = api.get_json::<serde_json::Value>(url).await;

        assert!(matches!(result, Err(ApiError::SessionExpired)));
        assert!(api.session().token_string().is_none());
    }

    #[tokio::test]
    async fn unauthorized_without_token_is_not_refreshed() {
        let server = MockServer::start();
        let protected = server.mock(|when, then| {
            when.method(GET).path("/api/reports");
            then.status(401).json_body(json!({"error": "Non authentifié"}));
        });
        let refresh = server.mock(|when, then| {
            when.method(POST).path("/api/auth/refresh");
            then.status(200).json_body(json!({"token": "fresh-token"}));
        });

        let api = api_against(&server, MemorySessionStore::new());
        let url = api.endpoint("reports").unwrap();
        let result = api.get_json::<serde_json::Value>(url).await;

        assert!(matches!(result, Err(ApiError::Unauthenticated)));
        protected.assert_hits(1);
        refresh.assert_hits(0);
    }

    #[tokio::test]
    async fn bearer_header_is_attached_when_a_token_exists() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/merchants")
                .header("authorization", "Bearer stored-token");
            then.status(200).json_body(json!({"merchants": []}));
        });

        let api = api_against(&server, seeded_store("stored-token"));
        let url = api.endpoint("merchants").unwrap();
        let result = api.get_json::<serde_json::Value>(url).await;

        assert!(result.is_ok());
        mock.assert();
    }

    #[tokio::test]
    async fn query_parameters_are_appended() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/maraudes")
                .query_param("limit", "100")
                .query_param("associationId", "assoc-1");
            then.status(200).json_body(json!({"actions": []}));
        });

        let api = api_against(&server, seeded_store("stored-token"));
        let url = api
            .endpoint_with(
                "maraudes",
                &[
                    ("limit", "100".to_string()),
                    ("associationId", "assoc-1".to_string()),
                ],
            )
            .unwrap();
        let result = api.get_json::<serde_json::Value>(url).await;

        assert!(result.is_ok());
        mock.assert();
    }
}
