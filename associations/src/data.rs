use crate::fields::{AssociationEmail, AssociationName, PhoneNumber, WebsiteUrl};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use session::data::UserRole;
use session::FieldErrors;
use shared_kernel::entity_ids::{ActionId, AssociationId, UserId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub id: AssociationId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSummary {
    pub id: ActionId,
    pub title: String,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    pub status: String,
}

/// Detail view: the association plus its embedded member and action rows.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationDetail {
    #[serde(flatten)]
    pub association: Association,
    #[serde(default)]
    pub users: Option<Vec<MemberSummary>>,
    #[serde(default)]
    pub maraude_actions: Option<Vec<ActionSummary>>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct UserCounts {
    pub total: u32,
    pub active: u32,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ActionCounts {
    pub total: u32,
    pub completed: u32,
    pub planned: u32,
    pub in_progress: u32,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AssociationStats {
    pub users: UserCounts,
    pub actions: ActionCounts,
}

/// Create/update payload. Checked client-side before submission; messages
/// are keyed by wire field name.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl AssociationInput {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if AssociationName::try_from(self.name.clone()).is_err() {
            errors.insert("name".into(), "Le nom est requis".into());
        }
        if AssociationEmail::try_from(self.email.clone()).is_err() {
            errors.insert("email".into(), "L'email est invalide".into());
        }
        if let Some(phone) = &self.phone {
            if PhoneNumber::try_from(phone.clone()).is_err() {
                errors.insert("phone".into(), "Le téléphone est invalide".into());
            }
        }
        if let Some(website) = &self.website {
            if WebsiteUrl::try_from(website.clone()).is_err() {
                errors.insert("website".into(), "Le site web est invalide".into());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> AssociationInput {
        AssociationInput {
            name: "Entraide Bordeaux".into(),
            email: "contact@entraide-bordeaux.fr".into(),
            phone: Some("05 56 12 34 56".into()),
            website: Some("https://entraide-bordeaux.fr".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn each_invalid_field_is_reported() {
        let input = AssociationInput {
            name: "  ".into(),
            email: "pas-un-email".into(),
            phone: Some("abc".into()),
            website: Some("pas-une-url".into()),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("phone"));
        assert!(errors.contains_key("website"));
    }

    #[test]
    fn omitted_optional_fields_are_not_validated() {
        let input = AssociationInput {
            name: "Entraide Bordeaux".into(),
            email: "contact@entraide-bordeaux.fr".into(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
