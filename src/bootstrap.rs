use crate::config::Config;
use crate::domain::entities::HolidaySet;
use crate::domain::ports::statute_repository::StatuteRepository;
use crate::domain::services::BusinessDayDeadlineCalculator;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::InMemoryStatuteRepository;
use crate::services::{DeadlineService, StatuteService};
use anyhow::Context;
use std::sync::Arc;

pub fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    let holidays = config
        .load_holidays()
        .context("Failed to load holiday calendar")?;
    tracing::info!(
        "Holiday calendar loaded with {} fixed holidays{}",
        holidays.len(),
        config
            .holidays_file
            .as_ref()
            .map(|p| format!(" from {}", p.display()))
            .unwrap_or_default()
    );

    Ok(app_state_with(holidays, config))
}

/// Wire services around an already-built holiday set
pub fn app_state_with(holidays: HolidaySet, config: &Config) -> AppState {
    let calculator =
        BusinessDayDeadlineCalculator::new(holidays).with_max_day_count(config.max_day_count);
    let deadline_service = DeadlineService::new(calculator, config.default_locale);

    let statute_repo = Arc::new(InMemoryStatuteRepository::new()) as Arc<dyn StatuteRepository>;
    let statute_service = StatuteService::new(statute_repo);

    AppState {
        deadline_service: Arc::new(deadline_service),
        statute_service: Arc::new(statute_service),
    }
}
