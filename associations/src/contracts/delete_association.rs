use crate::contracts::{AssociationSubsystem, MessageResponse};
use session::ApiError;
use shared_kernel::entity_ids::AssociationId;

impl AssociationSubsystem {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn delete_association(&self, id: &AssociationId) -> Result<(), ApiError> {
        let url = self.api().endpoint(&format!("associations/{id}"))?;
        let _: MessageResponse = self.api().delete_json(url).await?;
        Ok(())
    }
}
