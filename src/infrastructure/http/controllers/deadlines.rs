use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<Locale>,
}

/// POST /api/deadlines - Compute a deadline
pub async fn compute_deadline(
    State(state): State<AppState>,
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> ApiResult<Json<DeadlineResponse>> {
    let Json(request) = payload?;
    let response = state.deadline_service.compute(&request)?;
    Ok(Json(response))
}

/// GET /api/business-days/:date - Check whether a date is a business day
pub async fn get_business_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<LocaleQuery>,
) -> ApiResult<Json<BusinessDayResponse>> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", date)))?;

    Ok(Json(state.deadline_service.business_day(date, params.locale)))
}

/// GET /api/holidays - List the fixed holidays skipped in business-day counting
pub async fn list_holidays(State(state): State<AppState>) -> Json<HolidayListResponse> {
    Json(state.deadline_service.holidays())
}
