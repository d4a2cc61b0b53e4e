use crate::contracts::{ReportEnvelope, ReportSubsystem};
use crate::data::MaraudeReport;
use session::ApiError;
use shared_kernel::entity_ids::ReportId;

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self, report), level = "info")]
    pub async fn update_report(
        &self,
        id: &ReportId,
        report: MaraudeReport,
    ) -> Result<MaraudeReport, ApiError> {
        report.validate().map_err(ApiError::Validation)?;
        let url = self.api().endpoint(&format!("reports/{id}"))?;
        let envelope: ReportEnvelope = self.api().put_json(url, &report).await?;
        Ok(envelope.report)
    }
}
