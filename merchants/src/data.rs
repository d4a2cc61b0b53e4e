use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::entity_ids::{MerchantId, UserId};
use shared_kernel::geo::GeoPoint;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerchantCategory {
    Restaurant,
    Cafe,
    Bakery,
    Pharmacy,
    ClothingStore,
    Supermarket,
    Laundromat,
    HealthCenter,
    Other,
}

impl MerchantCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MerchantCategory::Restaurant => "restaurant",
            MerchantCategory::Cafe => "cafe",
            MerchantCategory::Bakery => "bakery",
            MerchantCategory::Pharmacy => "pharmacy",
            MerchantCategory::ClothingStore => "clothing_store",
            MerchantCategory::Supermarket => "supermarket",
            MerchantCategory::Laundromat => "laundromat",
            MerchantCategory::HealthCenter => "health_center",
            MerchantCategory::Other => "other",
        }
    }
}

/// Service a merchant offers to beneficiaries. The backend's vocabulary is
/// open-ended, so codes outside the known set are carried as-is instead of
/// failing the whole fetch.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTag {
    FreeCoffee,
    FreeMeal,
    Restroom,
    Wifi,
    PhoneCharging,
    HygieneKit,
    FirstAid,
    Information,
    Shower,
    FoodDistribution,
    MedicalConsultation,
    #[serde(untagged)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: MerchantId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: MerchantCategory,
    #[serde(default)]
    pub services: Vec<ServiceTag>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Merchant {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
