use crate::contracts::ReportSubsystem;
use crate::data::MaraudeReport;
use chrono::NaiveDate;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::entity_ids::ActionId;

/// Pre-submission probe: does a report already exist for this action and
/// date? The form runs it before allowing a create.
#[derive(Debug, Deserialize)]
pub struct DuplicateCheck {
    pub exists: bool,
    #[serde(default)]
    pub report: Option<MaraudeReport>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn check_duplicate(
        &self,
        action_id: &ActionId,
        report_date: NaiveDate,
    ) -> Result<DuplicateCheck, ApiError> {
        let url = self.api().endpoint_with(
            "reports/check-duplicate",
            &[
                ("maraudeActionId", action_id.inner()),
                ("reportDate", report_date.to_string()),
            ],
        )?;
        self.api().get_json(url).await
    }
}
