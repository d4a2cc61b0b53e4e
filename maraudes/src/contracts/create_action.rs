use crate::contracts::{ActionEnvelope, MaraudeSubsystem};
use crate::data::{OutreachAction, Waypoint};
use chrono::NaiveDate;
use serde::Serialize;
use session::{ApiError, FieldErrors};
use shared_kernel::day_of_week::DayOfWeek;
use shared_kernel::geo::GeoPoint;

/// Form payload for creating or editing an action.
///
/// `normalized()` mirrors what the form does before submitting: blank
/// optional strings disappear, and whichever schedule field does not match
/// the recurrence kind is dropped.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionInput {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_recurring: bool,
    pub start_time: String,
    pub participants_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<Waypoint>>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl ActionInput {
    pub fn normalized(mut self) -> Self {
        self.description = blank_to_none(self.description);
        self.address = blank_to_none(self.address);
        self.notes = blank_to_none(self.notes);
        self.end_time = blank_to_none(self.end_time);
        if self.is_recurring {
            self.scheduled_date = None;
        } else {
            self.day_of_week = None;
        }
        self
    }

    /// Client-side checks that block submission before any network call.
    /// Messages are keyed by wire field name.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.insert("title".into(), "Le titre est requis".into());
        }
        if self.start_time.trim().is_empty() {
            errors.insert("startTime".into(), "L'heure de début est requise".into());
        }
        if self.is_recurring && self.day_of_week.is_none() {
            errors.insert(
                "dayOfWeek".into(),
                "Le jour de la semaine est requis pour les maraudes récurrentes".into(),
            );
        }
        if !self.is_recurring && self.scheduled_date.is_none() {
            errors.insert(
                "scheduledDate".into(),
                "La date est requise pour les maraudes ponctuelles".into(),
            );
        }
        if let Err(error) = GeoPoint::validated(self.latitude, self.longitude) {
            match error {
                shared_kernel::geo::CoordinateError::LatitudeOutOfRange => {
                    errors.insert("latitude".into(), "Latitude invalide".into());
                }
                shared_kernel::geo::CoordinateError::LongitudeOutOfRange => {
                    errors.insert("longitude".into(), "Longitude invalide".into());
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl MaraudeSubsystem {
    #[tracing::instrument(err, skip(self, input), level = "info")]
    pub async fn create_action(&self, input: ActionInput) -> Result<OutreachAction, ApiError> {
        let input = input.normalized();
        input.validate().map_err(ApiError::Validation)?;
        let url = self.api().endpoint("maraudes")?;
        let envelope: ActionEnvelope = self.api().post_json(url, &input).await?;
        Ok(envelope.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::testing::{sample_action_json, subsystem_against};
    use httpmock::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    fn recurring_input() -> ActionInput {
        ActionInput {
            title: "Maraude Saint-Michel".into(),
            latitude: 44.8378,
            longitude: -0.5792,
            is_recurring: true,
            start_time: "19:00".into(),
            participants_count: 4,
            description: None,
            address: Some("Place Saint-Michel, Bordeaux".into()),
            notes: None,
            end_time: None,
            day_of_week: Some(DayOfWeek::Wednesday),
            scheduled_date: None,
            waypoints: None,
        }
    }

    #[tokio::test]
    async fn posts_the_normalized_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/maraudes")
                .header("authorization", "Bearer test-token")
                .json_body_partial(
                    json!({
                        "title": "Maraude Saint-Michel",
                        "isRecurring": true,
                        "dayOfWeek": 3
                    })
                    .to_string(),
                );
            then.status(201).json_body(json!({
                "message": "Maraude créée",
                "action": sample_action_json("action-9", "planned")
            }));
        });

        let subsystem = subsystem_against(&server);
        let action = subsystem.create_action(recurring_input()).await.unwrap();

        mock.assert();
        assert_eq!(action.id, *"action-9");
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_network() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/maraudes");
            then.status(201).json_body(json!({
                "action": sample_action_json("action-9", "planned")
            }));
        });

        let subsystem = subsystem_against(&server);
        let mut input = recurring_input();
        input.title = "   ".into();
        let result = subsystem.create_action(input).await;

        match result {
            Err(ApiError::Validation(details)) => {
                assert_eq!(details["title"], "Le titre est requis");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        mock.assert_hits(0);
    }

    #[rstest]
    #[case::missing_start_time("startTime", |input: &mut ActionInput| input.start_time = String::new())]
    #[case::recurring_without_day("dayOfWeek", |input: &mut ActionInput| input.day_of_week = None)]
    #[case::bad_latitude("latitude", |input: &mut ActionInput| input.latitude = 95.0)]
    #[case::bad_longitude("longitude", |input: &mut ActionInput| input.longitude = -200.0)]
    fn validation_flags_the_offending_field(
        #[case] field: &str,
        #[case] mutate: impl FnOnce(&mut ActionInput),
    ) {
        let mut input = recurring_input();
        mutate(&mut input);
        let errors = input.validate().unwrap_err();
        assert!(errors.contains_key(field), "missing {field} in {errors:?}");
    }

    #[test]
    fn one_off_without_date_is_rejected() {
        let mut input = recurring_input();
        input.is_recurring = false;
        input.day_of_week = None;
        input.scheduled_date = None;
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors["scheduledDate"],
            "La date est requise pour les maraudes ponctuelles"
        );
    }

    #[test]
    fn normalization_drops_blank_optionals_and_mismatched_schedule() {
        let mut input = recurring_input();
        input.description = Some("   ".into());
        input.end_time = Some(String::new());
        input.scheduled_date = NaiveDate::from_ymd_opt(2024, 1, 6);
        let normalized = input.normalized();
        assert_eq!(normalized.description, None);
        assert_eq!(normalized.end_time, None);
        assert_eq!(normalized.scheduled_date, None);
        assert_eq!(normalized.day_of_week, Some(DayOfWeek::Wednesday));

        let mut one_off = recurring_input();
        one_off.is_recurring = false;
        one_off.scheduled_date = NaiveDate::from_ymd_opt(2024, 1, 6);
        let normalized = one_off.normalized();
        assert_eq!(normalized.day_of_week, None);
        assert!(normalized.scheduled_date.is_some());
    }
}
