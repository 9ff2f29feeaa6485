use chrono::{Datelike, NaiveDate};
use tracing::{debug, error, warn};

use crate::domain::entities::*;
use crate::domain::errors::DeadlineError;
use crate::domain::services::BusinessDayDeadlineCalculator;

/// Service for computing deadlines and answering business-day lookups
#[derive(Debug, Clone)]
pub struct DeadlineService {
    calculator: BusinessDayDeadlineCalculator,
    default_locale: Locale,
}

impl DeadlineService {
    /// Create a new deadline service
    pub fn new(calculator: BusinessDayDeadlineCalculator, default_locale: Locale) -> Self {
        Self {
            calculator,
            default_locale,
        }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Compute a deadline from raw request fields
    pub fn compute(&self, request: &DeadlineRequest) -> Result<DeadlineResponse, DeadlineError> {
        let mode = request.counting_mode;
        let locale = request.locale.unwrap_or(self.default_locale);

        let outcome = self.calculator.calculate_from_input(
            request.start_date.as_deref(),
            request.day_count,
            mode,
        );

        match outcome {
            Ok(computed) => {
                metrics::counter!(
                    "deadline_computations_total",
                    "mode" => mode.as_str(),
                    "outcome" => "ok"
                )
                .increment(1);

                debug!(
                    "Computed {} deadline: {} + {} -> {} ({} skipped)",
                    mode,
                    computed.start_date,
                    computed.day_count,
                    computed.due_date,
                    computed.skipped_days
                );

                Ok(render(&computed, locale))
            }
            Err(e) => {
                metrics::counter!(
                    "deadline_computations_total",
                    "mode" => mode.as_str(),
                    "outcome" => e.code()
                )
                .increment(1);

                if e.is_validation() {
                    warn!(
                        "Rejected deadline request (start_date: {:?}, day_count: {:?}): {}",
                        request.start_date, request.day_count, e
                    );
                } else {
                    error!(
                        "Deadline computation aborted (start_date: {:?}, day_count: {:?}): {}",
                        request.start_date, request.day_count, e
                    );
                }

                Err(e)
            }
        }
    }

    /// Classify a date as business day, weekend or holiday
    pub fn business_day(&self, date: NaiveDate, locale: Option<Locale>) -> BusinessDayResponse {
        let locale = locale.unwrap_or(self.default_locale);
        let weekday = locale.weekday_name(date.weekday()).to_string();

        let (business_day, reason, holiday_name) = match self.calculator.classify(&date) {
            DayKind::BusinessDay => (true, None, None),
            DayKind::Weekend(_) => (false, Some("weekend".to_string()), None),
            DayKind::Holiday(name) => (false, Some("holiday".to_string()), Some(name)),
        };

        BusinessDayResponse {
            date,
            weekday,
            business_day,
            reason,
            holiday_name,
        }
    }

    pub fn holidays(&self) -> HolidayListResponse {
        let holidays = self.calculator.holidays().holidays();
        HolidayListResponse {
            count: holidays.len(),
            holidays,
        }
    }
}

fn render(computed: &ComputedDeadline, locale: Locale) -> DeadlineResponse {
    DeadlineResponse {
        start_date: computed.start_date,
        due_date: computed.due_date,
        formatted_date: locale.format_date(&computed.due_date),
        weekday: locale.weekday_name(computed.due_date.weekday()).to_string(),
        day_count: computed.day_count,
        counting_mode: computed.counting_mode,
        skipped_days: computed.skipped_days,
        locale,
    }
}
