use crate::contracts::MaraudeSubsystem;
use crate::data::{ActionStatus, OutreachAction};
use serde::Deserialize;
use session::ApiError;
use shared_kernel::entity_ids::AssociationId;
use shared_kernel::pagination::Pagination;

/// Server-side filters for the action list. All optional; the backend
/// paginates whatever remains.
#[derive(Debug, Default)]
pub struct ActionsQuery {
    pub association_id: Option<AssociationId>,
    pub status: Option<ActionStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ActionsQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(association_id) = &self.association_id {
            params.push(("associationId", association_id.inner()));
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
pub struct ActionsPage {
    pub actions: Vec<OutreachAction>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl MaraudeSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn list_actions(&self, query: &ActionsQuery) -> Result<ActionsPage, ApiError> {
        let url = self.api().endpoint_with("maraudes", &query.to_params())?;
        self.api().get_json(url).await
    }
}
