use crate::contracts::{ActionEnvelope, MaraudeSubsystem};
use crate::data::OutreachAction;
use session::ApiError;
use shared_kernel::entity_ids::ActionId;

impl MaraudeSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn get_action(&self, id: &ActionId) -> Result<OutreachAction, ApiError> {
        let url = self.api().endpoint(&format!("maraudes/{id}"))?;
        let envelope: ActionEnvelope = self.api().get_json(url).await?;
        Ok(envelope.action)
    }
}
