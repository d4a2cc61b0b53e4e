use anyhow::Context;
use lazy_static::lazy_static;
use reqwest::Method;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

lazy_static! {
    // Single shared client. No transient-retry middleware: the only retry
    // this application performs is the one-shot refresh-and-retry on 401,
    // which the session layer owns.
    static ref CLIENT: ClientWithMiddleware = ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .build();
}

pub struct HttpClient;

impl HttpClient {
    /// Request builder on the shared client, for callers that need to set
    /// headers or inspect the response status themselves (the authorized
    /// API wrapper does both).
    pub fn request(method: Method, url: Url) -> RequestBuilder {
        CLIENT.request(method, url)
    }

    pub async fn get_json<DTO: DeserializeOwned>(url: Url) -> anyhow::Result<DTO> {
        let response = CLIENT
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch request from {url}"))?;
        let err_msg = format!("Failed to deserialize response {response:?}");
        response.json::<DTO>().await.context(err_msg)
    }
}
