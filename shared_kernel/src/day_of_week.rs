use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO weekday as the backend numbers it: 1 = Monday .. 7 = Sunday.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

pub const ALL_DAYS: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

impl DayOfWeek {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn of_date(date: NaiveDate) -> Self {
        let number = date.weekday().number_from_monday() as u8;
        Self::try_from(number).unwrap_or(DayOfWeek::Monday)
    }

    pub fn today() -> Self {
        Self::of_date(chrono::Local::now().date_naive())
    }

    pub fn french_name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Lundi",
            DayOfWeek::Tuesday => "Mardi",
            DayOfWeek::Wednesday => "Mercredi",
            DayOfWeek::Thursday => "Jeudi",
            DayOfWeek::Friday => "Vendredi",
            DayOfWeek::Saturday => "Samedi",
            DayOfWeek::Sunday => "Dimanche",
        }
    }

    pub fn french_short(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Lun",
            DayOfWeek::Tuesday => "Mar",
            DayOfWeek::Wednesday => "Mer",
            DayOfWeek::Thursday => "Jeu",
            DayOfWeek::Friday => "Ven",
            DayOfWeek::Saturday => "Sam",
            DayOfWeek::Sunday => "Dim",
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            7 => Ok(DayOfWeek::Sunday),
            other => Err(format!("{other} is not a weekday between 1 and 7")),
        }
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.number()
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.french_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_numbers_round_trip() {
        for day in ALL_DAYS {
            assert_eq!(DayOfWeek::try_from(day.number()), Ok(day));
        }
        assert!(DayOfWeek::try_from(0).is_err());
        assert!(DayOfWeek::try_from(8).is_err());
    }

    #[test]
    fn derives_weekday_from_date() {
        // 2024-01-03 was a Wednesday.
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(DayOfWeek::of_date(date), DayOfWeek::Wednesday);
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(DayOfWeek::of_date(sunday), DayOfWeek::Sunday);
    }

    #[test]
    fn serializes_as_backend_number() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, "3");
        let day: DayOfWeek = serde_json::from_str("7").unwrap();
        assert_eq!(day, DayOfWeek::Sunday);
    }
}
