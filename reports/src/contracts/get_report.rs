use crate::contracts::{ReportEnvelope, ReportSubsystem};
use crate::data::MaraudeReport;
use session::ApiError;
use shared_kernel::entity_ids::ReportId;

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn get_report(&self, id: &ReportId) -> Result<MaraudeReport, ApiError> {
        let url = self.api().endpoint(&format!("reports/{id}"))?;
        let envelope: ReportEnvelope = self.api().get_json(url).await?;
        Ok(envelope.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::testing::{sample_report_json, subsystem_against};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn unwraps_the_report_envelope() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/reports/report-1");
            then.status(200)
                .json_body(json!({"report": sample_report_json("report-1", "draft")}));
        });

        let subsystem = subsystem_against(&server);
        let report = subsystem.get_report(&"report-1".into()).await.unwrap();

        mock.assert();
        assert_eq!(report.beneficiaries_count, 17);
    }
}
