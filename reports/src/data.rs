use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use session::FieldErrors;
use shared_kernel::entity_ids::{ActionId, DistributionTypeId, ReportId};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Validated,
}

impl ReportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Submitted => "submitted",
            ReportStatus::Validated => "validated",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionCategory {
    Meal,
    Hygiene,
    Clothing,
    Medical,
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionType {
    pub id: DistributionTypeId,
    pub name: String,
    pub category: DistributionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub is_active: bool,
}

/// One line of supplies handed out: a distribution type and how many.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub distribution_type_id: DistributionTypeId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Medical,
    Social,
    Security,
    Housing,
    Other,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// An incident recorded during the outreach, optionally pinned to a
/// location and flagged for follow-up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_description: Option<String>,
    pub situation_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
    pub follow_up_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaraudeReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReportId>,
    pub maraude_action_id: ActionId,
    pub report_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub beneficiaries_count: u32,
    pub volunteers_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulties_encountered: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_points: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent_situations_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributions: Option<Vec<Distribution>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<Alert>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_urgent_situations: Option<bool>,
}

impl MaraudeReport {
    /// Client-side checks before submission. Counts are unsigned by
    /// construction; what remains is the required-field floor the form
    /// enforces.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.maraude_action_id.inner().trim().is_empty() {
            errors.insert(
                "maraudeActionId".into(),
                "La maraude associée est requise".into(),
            );
        }
        if self.start_time.trim().is_empty() {
            errors.insert("startTime".into(), "L'heure de début est requise".into());
        }
        if self.end_time.trim().is_empty() {
            errors.insert("endTime".into(), "L'heure de fin est requise".into());
        }
        if self.volunteers_count < 1 {
            errors.insert(
                "volunteersCount".into(),
                "Au moins un bénévole est requis".into(),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
