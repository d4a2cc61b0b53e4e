use crate::contracts::{MessageResponse, ReportSubsystem};
use session::ApiError;
use shared_kernel::entity_ids::ReportId;

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn delete_report(&self, id: &ReportId) -> Result<(), ApiError> {
        let url = self.api().endpoint(&format!("reports/{id}"))?;
        let _: MessageResponse = self.api().delete_json(url).await?;
        Ok(())
    }
}
