pub mod error;

pub use error::{ApiError, ApiResult};

use crate::services::{DeadlineService, StatuteService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub deadline_service: Arc<DeadlineService>,
    pub statute_service: Arc<StatuteService>,
}
