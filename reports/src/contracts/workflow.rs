//! Draft → submitted → validated transitions. The backend owns the rules;
//! the client just issues the PATCH and adopts the returned state.

use crate::contracts::{ReportEnvelope, ReportSubsystem};
use crate::data::MaraudeReport;
use serde_json::json;
use session::ApiError;
use shared_kernel::entity_ids::ReportId;

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn submit_report(&self, id: &ReportId) -> Result<MaraudeReport, ApiError> {
        let url = self.api().endpoint(&format!("reports/{id}/submit"))?;
        let envelope: ReportEnvelope = self.api().patch_json(url, &json!({})).await?;
        Ok(envelope.report)
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn validate_report(&self, id: &ReportId) -> Result<MaraudeReport, ApiError> {
        let url = self.api().endpoint(&format!("reports/{id}/validate"))?;
        let envelope: ReportEnvelope = self.api().patch_json(url, &json!({})).await?;
        Ok(envelope.report)
    }
}
