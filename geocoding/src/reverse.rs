use crate::config::SETTINGS_CONFIG;
use anyhow::Context;
use serde::Deserialize;
use shared_kernel::geo::GeoPoint;
use shared_kernel::http_client::HttpClient;
use url::Url;

pub struct ReverseGeocoder {
    host: String,
}

impl ReverseGeocoder {
    pub fn new(host: String) -> Self {
        ReverseGeocoder { host }
    }

    pub fn from_config() -> Self {
        Self::new(SETTINGS_CONFIG.geocoding.host.clone())
    }

    /// Looks the point up and returns its display address when the service
    /// knows one. Callers treat a failure as "no address", surfaced as an
    /// error so they can log it.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn reverse(&self, point: GeoPoint) -> anyhow::Result<Option<String>> {
        let url = self.reverse_url(point)?;
        let response = HttpClient::get_json::<ReverseResponse>(url).await?;
        Ok(response.display_name)
    }

    fn reverse_url(&self, point: GeoPoint) -> anyhow::Result<Url> {
        let host_with_path = format!("{}/reverse", self.host.trim_end_matches('/'));
        Url::parse_with_params(
            &host_with_path,
            &[
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
                ("format", "json".to_string()),
            ],
        )
        .context("Failed to parse reverse geocoding url")
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
}
