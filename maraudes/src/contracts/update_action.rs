use crate::contracts::create_action::ActionInput;
use crate::contracts::{ActionEnvelope, MaraudeSubsystem};
use crate::data::OutreachAction;
use session::ApiError;
use shared_kernel::entity_ids::ActionId;

impl MaraudeSubsystem {
    /// Same payload and client-side checks as creation, PUT to the
    /// existing action.
    #[tracing::instrument(err, skip(self, input), level = "info")]
    pub async fn update_action(
        &self,
        id: &ActionId,
        input: ActionInput,
    ) -> Result<OutreachAction, ApiError> {
        let input = input.normalized();
        input.validate().map_err(ApiError::Validation)?;
        let url = self.api().endpoint(&format!("maraudes/{id}"))?;
        let envelope: ActionEnvelope = self.api().put_json(url, &input).await?;
        Ok(envelope.action)
    }
}
