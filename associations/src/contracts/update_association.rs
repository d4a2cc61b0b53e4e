use crate::contracts::{AssociationEnvelope, AssociationSubsystem};
use crate::data::{Association, AssociationInput};
use session::ApiError;
use shared_kernel::entity_ids::AssociationId;

impl AssociationSubsystem {
    #[tracing::instrument(err, skip(self, input), level = "info")]
    pub async fn update_association(
        &self,
        id: &AssociationId,
        input: AssociationInput,
    ) -> Result<Association, ApiError> {
        input.validate().map_err(ApiError::Validation)?;
        let url = self.api().endpoint(&format!("associations/{id}"))?;
        let envelope: AssociationEnvelope = self.api().put_json(url, &input).await?;
        Ok(envelope.association)
    }
}
