use crate::contracts::MerchantSubsystem;
use crate::data::Merchant;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::geo::GeoPoint;

pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

#[derive(Debug, Deserialize)]
pub struct QueriedLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Merchants within `radius` km of a point, with the backend echoing the
/// query it answered.
#[derive(Debug, Deserialize)]
pub struct NearbyMerchants {
    pub merchants: Vec<Merchant>,
    pub location: QueriedLocation,
    pub radius: f64,
    pub count: u32,
}

impl MerchantSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn nearby_merchants(
        &self,
        center: GeoPoint,
        radius_km: Option<f64>,
    ) -> Result<NearbyMerchants, ApiError> {
        let radius = radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
        let url = self.api().endpoint_with(
            &format!("merchants/nearby/{}/{}", center.latitude, center.longitude),
            &[("radius", radius.to_string())],
        )?;
        self.api().get_json(url).await
    }
}
