use crate::contracts::AssociationSubsystem;
use crate::data::AssociationStats;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::entity_ids::AssociationId;

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    stats: AssociationStats,
}

impl AssociationSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn association_stats(
        &self,
        id: &AssociationId,
    ) -> Result<AssociationStats, ApiError> {
        let url = self.api().endpoint(&format!("associations/{id}/stats"))?;
        let envelope: StatsEnvelope = self.api().get_json(url).await?;
        Ok(envelope.stats)
    }
}
