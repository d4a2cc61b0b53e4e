//! Fixed French label tables for popup rendering.

use maraudes::data::ActionStatus;
use merchants::data::{MerchantCategory, ServiceTag};

pub fn status_label(status: ActionStatus) -> &'static str {
    match status {
        ActionStatus::Planned => "Planifiée",
        ActionStatus::InProgress => "En cours",
        ActionStatus::Completed => "Terminée",
        ActionStatus::Cancelled => "Annulée",
    }
}

pub fn category_label(category: MerchantCategory) -> &'static str {
    match category {
        MerchantCategory::Restaurant => "Restaurant",
        MerchantCategory::Cafe => "Café",
        MerchantCategory::Bakery => "Boulangerie",
        MerchantCategory::Pharmacy => "Pharmacie",
        MerchantCategory::Supermarket => "Supermarché",
        MerchantCategory::HealthCenter => "Centre de santé",
        MerchantCategory::Laundromat => "Laverie",
        MerchantCategory::ClothingStore => "Magasin de vêtements",
        MerchantCategory::Other => "Autre",
    }
}

/// Codes outside the known vocabulary render as-is.
pub fn service_label(service: &ServiceTag) -> &str {
    match service {
        ServiceTag::FreeCoffee => "Café gratuit",
        ServiceTag::FreeMeal => "Repas gratuit",
        ServiceTag::Restroom => "Toilettes",
        ServiceTag::Wifi => "WiFi",
        ServiceTag::PhoneCharging => "Recharge téléphone",
        ServiceTag::HygieneKit => "Kit hygiène",
        ServiceTag::FirstAid => "Premiers secours",
        ServiceTag::Information => "Information",
        ServiceTag::Shower => "Douche",
        ServiceTag::FoodDistribution => "Distribution alimentaire",
        ServiceTag::MedicalConsultation => "Consultation médicale",
        ServiceTag::Other(code) => code,
    }
}
