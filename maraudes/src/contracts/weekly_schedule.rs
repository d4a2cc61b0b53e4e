use crate::contracts::MaraudeSubsystem;
use crate::data::OutreachAction;
use serde::Deserialize;
use session::ApiError;
use shared_kernel::day_of_week::DayOfWeek;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub value: DayOfWeek,
    pub name: String,
    pub short_name: String,
}

/// The week grid: actions keyed by ISO day number, plus the day table the
/// backend renders headers from.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub weekly_schedule: BTreeMap<u8, Vec<OutreachAction>>,
    pub days: Vec<DayEntry>,
}

impl WeeklySchedule {
    pub fn actions_on(&self, day: DayOfWeek) -> &[OutreachAction] {
        self.weekly_schedule
            .get(&day.number())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl MaraudeSubsystem {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub async fn weekly_schedule(&self) -> Result<WeeklySchedule, ApiError> {
        let url = self.api().endpoint("maraudes/weekly-schedule")?;
        self.api().get_json(url).await
    }
}
