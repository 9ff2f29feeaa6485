use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};

/// GET /api/statutes?q= - Search the statute reference dataset
pub async fn search_statutes(
    State(state): State<AppState>,
    Query(params): Query<StatuteSearchQuery>,
) -> ApiResult<Json<StatuteListResponse>> {
    let statutes = state.statute_service.search(params.q.as_deref()).await?;

    Ok(Json(StatuteListResponse {
        count: statutes.len(),
        statutes,
    }))
}

/// GET /api/statutes/:id - Get a single statute
pub async fn get_statute(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Statute>> {
    let statute = state.statute_service.get(&id).await?;
    Ok(Json(statute))
}
