use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use super::locale::Locale;

/// Whether a deadline counts every calendar day or only business days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountingMode {
    #[serde(alias = "corridos")]
    Calendar,
    #[serde(alias = "uteis")]
    Business,
}

impl CountingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountingMode::Calendar => "calendar",
            CountingMode::Business => "business",
        }
    }
}

impl std::fmt::Display for CountingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CountingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calendar" | "corridos" => Ok(CountingMode::Calendar),
            "business" | "uteis" => Ok(CountingMode::Business),
            _ => Err(format!("Invalid counting mode: {}", s)),
        }
    }
}

/// Outcome of the calculator before any display formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedDeadline {
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub day_count: i64,
    pub counting_mode: CountingMode,
    /// Advanced days that were not counted (weekends and holidays)
    pub skipped_days: i64,
}

/// DTO for computing a deadline.
///
/// Fields are loose on purpose: a blank start date or a day count that is
/// missing or not an integer must surface as the calculator's own
/// validation errors instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct DeadlineRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "integer_or_none")]
    pub day_count: Option<i64>,
    pub counting_mode: CountingMode,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// Any JSON value; only integers survive, everything else becomes `None`.
fn integer_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_i64))
}

/// DTO for deadline response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeadlineResponse {
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub formatted_date: String,
    pub weekday: String,
    pub day_count: i64,
    pub counting_mode: CountingMode,
    pub skipped_days: i64,
    pub locale: Locale,
}

/// Classification of a single calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKind {
    BusinessDay,
    Weekend(Weekday),
    Holiday(String),
}

/// DTO for business-day lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDayResponse {
    pub date: NaiveDate,
    pub weekday: String,
    pub business_day: bool,
    pub reason: Option<String>,
    pub holiday_name: Option<String>,
}
