use crate::contracts::MerchantSubsystem;
use crate::data::{Merchant, MerchantCategory};
use serde::Deserialize;
use session::ApiError;
use shared_kernel::pagination::Pagination;

#[derive(Debug, Default)]
pub struct MerchantsQuery {
    pub category: Option<MerchantCategory>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl MerchantsQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[derive(Debug, Deserialize)]
pub struct MerchantsPage {
    pub merchants: Vec<Merchant>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl MerchantSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn list_merchants(&self, query: &MerchantsQuery) -> Result<MerchantsPage, ApiError> {
        let url = self.api().endpoint_with("merchants", &query.to_params())?;
        self.api().get_json(url).await
    }
}
