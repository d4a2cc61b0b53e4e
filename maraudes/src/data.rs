use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::day_of_week::DayOfWeek;
use shared_kernel::entity_ids::{ActionId, AssociationId, UserId, WaypointId};
use shared_kernel::geo::GeoPoint;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl ActionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionStatus::Planned => "planned",
            ActionStatus::InProgress => "in_progress",
            ActionStatus::Completed => "completed",
            ActionStatus::Cancelled => "cancelled",
        }
    }
}

/// An ordered stop along an outreach route. Owned by its action; `order`
/// is kept dense from 0 by the route plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub id: WaypointId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub order: u32,
}

impl Waypoint {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssociationRef {
    pub id: AssociationId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRef {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// How an action is scheduled, resolved from the wire convention.
///
/// The backend carries `isRecurring` plus one of `dayOfWeek` /
/// `scheduledDate`; nothing stops both or neither from being set. The
/// recurring flag wins when both are present, and `Unspecified` marks the
/// neither case so filters can treat it explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Schedule {
    Weekly(DayOfWeek),
    OneOff(NaiveDate),
    Unspecified,
}

impl Schedule {
    /// Weekday the action falls on, when one can be derived.
    pub fn day(self) -> Option<DayOfWeek> {
        match self {
            Schedule::Weekly(day) => Some(day),
            Schedule::OneOff(date) => Some(DayOfWeek::of_date(date)),
            Schedule::Unspecified => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachAction {
    pub id: ActionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<Waypoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    pub is_recurring: bool,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub status: ActionStatus,
    pub participants_count: u32,
    pub beneficiaries_helped: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials_distributed: Option<HashMap<String, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_by: UserId,
    pub association_id: AssociationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association: Option<AssociationRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<CreatorRef>,
    // Computed by the backend on read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_occurrence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_happening_today: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OutreachAction {
    pub fn start_point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn schedule(&self) -> Schedule {
        if self.is_recurring {
            match self.day_of_week {
                Some(day) => Schedule::Weekly(day),
                None => Schedule::Unspecified,
            }
        } else {
            match self.scheduled_date {
                Some(date) => Schedule::OneOff(date),
                None => Schedule::Unspecified,
            }
        }
    }

    pub fn happening_today(&self) -> bool {
        self.is_happening_today.unwrap_or(false)
    }
}
