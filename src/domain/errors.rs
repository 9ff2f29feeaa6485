use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of a deadline computation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineError {
    #[error("Start date is missing or not a valid date")]
    MissingStartDate,

    #[error("Day count must be a positive integer")]
    InvalidDayCount,

    #[error("Deadline count did not finish within {limit} advanced days")]
    IterationLimitExceeded { limit: i64 },

    #[error("Day count exceeds the maximum of {max}")]
    DayCountTooLarge { max: i64 },

    #[error("Deadline falls outside the supported calendar range")]
    DateOutOfRange,
}

impl DeadlineError {
    /// Stable machine-readable tag for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            DeadlineError::MissingStartDate => "missing_start_date",
            DeadlineError::InvalidDayCount => "invalid_day_count",
            DeadlineError::DayCountTooLarge { .. } => "day_count_too_large",
            DeadlineError::IterationLimitExceeded { .. } => "iteration_limit_exceeded",
            DeadlineError::DateOutOfRange => "date_out_of_range",
        }
    }

    /// Caller input errors as opposed to the defensive loop guard
    pub fn is_validation(&self) -> bool {
        !matches!(self, DeadlineError::IterationLimitExceeded { .. })
    }
}

pub type DeadlineResult<T> = Result<T, DeadlineError>;
