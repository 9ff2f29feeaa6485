use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Year-independent calendar day (month and day of month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Build a month-day, rejecting combinations that never occur.
    /// 02-29 is accepted since it exists in leap years.
    pub fn new(month: u32, day: u32) -> Result<Self, HolidayError> {
        // 2000 is a leap year, so every real month-day resolves
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(HolidayError::InvalidMonthDay(format!(
                "{:02}-{:02}",
                month, day
            )));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn of(date: &NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = HolidayError;

    /// Parses "MM-DD".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HolidayError::InvalidMonthDay(s.to_string());

        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;

        MonthDay::new(month, day).map_err(|_| invalid())
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Holiday calendar entry that recurs every year on the same month-day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHoliday {
    pub date: MonthDay,
    pub name: String,
}

impl FixedHoliday {
    pub fn new(date: MonthDay, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HolidayError {
    #[error("Invalid month-day '{0}', expected MM-DD")]
    InvalidMonthDay(String),

    #[error("Holiday {0} listed more than once")]
    Duplicate(MonthDay),
}

/// Immutable set of fixed holidays, keyed by month-day.
///
/// Only year-independent holidays are representable. Movable feasts
/// (Carnival, Good Friday, Corpus Christi) and state or municipal holidays
/// are not part of the default set and deadlines computed against it do
/// not skip them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    entries: BTreeMap<MonthDay, String>,
}

impl HolidaySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_holidays(
        holidays: impl IntoIterator<Item = FixedHoliday>,
    ) -> Result<Self, HolidayError> {
        let mut entries = BTreeMap::new();
        for holiday in holidays {
            if entries.insert(holiday.date, holiday.name).is_some() {
                return Err(HolidayError::Duplicate(holiday.date));
            }
        }
        Ok(Self { entries })
    }

    /// Brazilian fixed national holidays.
    pub fn brazilian_national() -> Self {
        const NATIONAL: [(u32, u32, &str); 8] = [
            (1, 1, "Confraternização Universal"),
            (4, 21, "Tiradentes"),
            (5, 1, "Dia do Trabalho"),
            (9, 7, "Independência do Brasil"),
            (10, 12, "Nossa Senhora Aparecida"),
            (11, 2, "Finados"),
            (11, 15, "Proclamação da República"),
            (12, 25, "Natal"),
        ];

        let entries = NATIONAL
            .iter()
            .map(|&(month, day, name)| (MonthDay { month, day }, name.to_string()))
            .collect();
        Self { entries }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.entries.contains_key(&MonthDay::of(date))
    }

    /// Name of the holiday falling on `date`, if any.
    pub fn holiday_name(&self, date: &NaiveDate) -> Option<&str> {
        self.entries.get(&MonthDay::of(date)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Holidays in calendar order
    pub fn holidays(&self) -> Vec<FixedHoliday> {
        self.entries
            .iter()
            .map(|(date, name)| FixedHoliday::new(*date, name.clone()))
            .collect()
    }
}

/// DTO for holiday list response
#[derive(Debug, Serialize, Deserialize)]
pub struct HolidayListResponse {
    pub holidays: Vec<FixedHoliday>,
    pub count: usize,
}
