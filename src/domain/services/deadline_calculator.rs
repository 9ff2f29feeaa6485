use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::entities::{ComputedDeadline, CountingMode, DayKind, HolidaySet};
use crate::domain::errors::{DeadlineError, DeadlineResult};

/// Computes legal deadlines by walking the calendar one day at a time.
///
/// Counting starts on the day after `start_date`, since the triggering event
/// (publication, service) never counts. In business-day mode weekends and
/// the configured fixed holidays are walked over without being counted.
#[derive(Debug, Clone)]
pub struct BusinessDayDeadlineCalculator {
    holidays: HolidaySet,
    max_day_count: i64,
}

/// Largest accepted day count, about a century of calendar days
pub const DEFAULT_MAX_DAY_COUNT: i64 = 36_500;

impl BusinessDayDeadlineCalculator {
    pub fn new(holidays: HolidaySet) -> Self {
        Self {
            holidays,
            max_day_count: DEFAULT_MAX_DAY_COUNT,
        }
    }

    /// Bound the day walk; counts above `max_day_count` are rejected before
    /// any date is advanced.
    pub fn with_max_day_count(mut self, max_day_count: i64) -> Self {
        self.max_day_count = max_day_count;
        self
    }

    pub fn max_day_count(&self) -> i64 {
        self.max_day_count
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Weekend wins over holiday when both apply.
    pub fn classify(&self, date: &NaiveDate) -> DayKind {
        let weekday = date.weekday();
        if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            return DayKind::Weekend(weekday);
        }

        match self.holidays.holiday_name(date) {
            Some(name) => DayKind::Holiday(name.to_string()),
            None => DayKind::BusinessDay,
        }
    }

    pub fn is_business_day(&self, date: &NaiveDate) -> bool {
        self.classify(date) == DayKind::BusinessDay
    }

    /// Compute the deadline `day_count` days after `start_date`.
    pub fn calculate(
        &self,
        start_date: Option<NaiveDate>,
        day_count: Option<i64>,
        mode: CountingMode,
    ) -> DeadlineResult<ComputedDeadline> {
        let start_date = start_date.ok_or(DeadlineError::MissingStartDate)?;
        let day_count = match day_count {
            Some(count) if count > 0 => count,
            _ => return Err(DeadlineError::InvalidDayCount),
        };
        if day_count > self.max_day_count {
            return Err(DeadlineError::DayCountTooLarge {
                max: self.max_day_count,
            });
        }

        let limit = iteration_limit(day_count);
        let mut current = start_date;
        let mut counted = 0_i64;
        let mut advanced = 0_i64;

        while counted < day_count {
            if advanced >= limit {
                return Err(DeadlineError::IterationLimitExceeded { limit });
            }

            current = current.succ_opt().ok_or(DeadlineError::DateOutOfRange)?;
            advanced += 1;

            if mode == CountingMode::Calendar || self.is_business_day(&current) {
                counted += 1;
            }
        }

        Ok(ComputedDeadline {
            start_date,
            due_date: current,
            day_count,
            counting_mode: mode,
            skipped_days: advanced - counted,
        })
    }

    /// Same as [`calculate`](Self::calculate) but takes the raw start date
    /// as typed by a user.
    pub fn calculate_from_input(
        &self,
        raw_start_date: Option<&str>,
        day_count: Option<i64>,
        mode: CountingMode,
    ) -> DeadlineResult<ComputedDeadline> {
        let start_date = parse_start_date(raw_start_date)?;
        self.calculate(Some(start_date), day_count, mode)
    }
}

/// Upper bound on advanced days for a count. Heuristic guard only.
pub fn iteration_limit(day_count: i64) -> i64 {
    day_count.saturating_mul(7).saturating_add(30)
}

/// Parse a start date given as `YYYY-MM-DD` or `DD/MM/YYYY`.
pub fn parse_start_date(raw: Option<&str>) -> DeadlineResult<NaiveDate> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(DeadlineError::MissingStartDate);
    }

    // FromStr takes ISO dates, including signed years past 9999
    raw.parse::<NaiveDate>()
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map_err(|_| DeadlineError::MissingStartDate)
}
