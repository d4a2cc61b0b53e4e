use crate::contracts::AssociationSubsystem;
use crate::data::Association;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::pagination::Pagination;

#[derive(Debug, Deserialize)]
pub struct AssociationsPage {
    pub associations: Vec<Association>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl AssociationSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn list_associations(&self) -> Result<AssociationsPage, ApiError> {
        let url = self.api().endpoint("associations")?;
        self.api().get_json(url).await
    }
}
