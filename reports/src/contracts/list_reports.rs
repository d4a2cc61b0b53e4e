use crate::contracts::ReportSubsystem;
use crate::data::{MaraudeReport, ReportStatus};
use serde::Deserialize;
use session::ApiError;
use shared_kernel::entity_ids::ActionId;
use shared_kernel::pagination::Pagination;

/// List filters; blank values are never sent (the form builds its query
/// the same way).
#[derive(Debug, Default)]
pub struct ReportsQuery {
    pub maraude_action_id: Option<ActionId>,
    pub status: Option<ReportStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ReportsQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(action_id) = &self.maraude_action_id {
            params.push(("maraudeActionId", action_id.inner()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportsPage {
    pub reports: Vec<MaraudeReport>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn list_reports(&self, query: &ReportsQuery) -> Result<ReportsPage, ApiError> {
        let url = self.api().endpoint_with("reports", &query.to_params())?;
        self.api().get_json(url).await
    }
}
