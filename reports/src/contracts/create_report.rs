use crate::contracts::{ReportEnvelope, ReportSubsystem};
use crate::data::MaraudeReport;
use session::ApiError;

impl ReportSubsystem {
    /// Creating an unauthenticated report is rejected locally: the token
    /// must exist before the round-trip (the backend would 401 anyway).
    #[tracing::instrument(err, skip(self, report), level = "info")]
    pub async fn create_report(&self, report: MaraudeReport) -> Result<MaraudeReport, ApiError> {
        if self.api().session().token().is_none() {
            return Err(ApiError::Unauthenticated);
        }
        report.validate().map_err(ApiError::Validation)?;
        let url = self.api().endpoint("reports")?;
        let envelope: ReportEnvelope = self.api().post_json(url, &report).await?;
        Ok(envelope.report)
    }
}
