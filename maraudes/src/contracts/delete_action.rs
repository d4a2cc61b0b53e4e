use crate::contracts::{MaraudeSubsystem, MessageResponse};
use session::ApiError;
use shared_kernel::entity_ids::ActionId;

impl MaraudeSubsystem {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn delete_action(&self, id: &ActionId) -> Result<(), ApiError> {
        let url = self.api().endpoint(&format!("maraudes/{id}"))?;
        let _: MessageResponse = self.api().delete_json(url).await?;
        Ok(())
    }
}
