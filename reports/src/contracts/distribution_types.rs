use crate::contracts::ReportSubsystem;
use crate::data::{DistributionCategory, DistributionType};
use serde::Deserialize;
use session::ApiError;
use std::collections::BTreeMap;

/// Catalogue of what can be distributed, plus the category grouping the
/// form renders sections from. Public endpoint, no auth required.
#[derive(Debug, Deserialize)]
pub struct DistributionCatalogue {
    pub types: Vec<DistributionType>,
    #[serde(default)]
    pub grouped: BTreeMap<String, Vec<DistributionType>>,
}

impl DistributionCatalogue {
    pub fn in_category(&self, category: DistributionCategory) -> Vec<&DistributionType> {
        self.types
            .iter()
            .filter(|distribution_type| distribution_type.category == category)
            .collect()
    }
}

impl ReportSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn distribution_types(&self) -> Result<DistributionCatalogue, ApiError> {
        let url = self.api().endpoint("reports/distribution-types")?;
        self.api().get_json(url).await
    }
}
