use crate::contracts::MaraudeSubsystem;
use crate::data::OutreachAction;
use chrono::NaiveDate;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::day_of_week::DayOfWeek;

/// Actions running or scheduled for the current day, as computed by the
/// backend (which also echoes what "today" is).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaySnapshot {
    pub actions: Vec<OutreachAction>,
    pub count: u32,
    pub date: NaiveDate,
    pub current_day_of_week: DayOfWeek,
    pub current_day_name: String,
}

impl MaraudeSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn today_active(&self) -> Result<TodaySnapshot, ApiError> {
        let url = self.api().endpoint("maraudes/today/active")?;
        self.api().get_json(url).await
    }
}
