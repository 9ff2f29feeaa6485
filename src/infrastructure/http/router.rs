use crate::infrastructure::http::controllers as api;
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/deadlines", post(api::deadlines::compute_deadline))
        .route(
            "/api/business-days/:date",
            get(api::deadlines::get_business_day),
        )
        .route("/api/holidays", get(api::deadlines::list_holidays))
        .route("/api/statutes", get(api::statutes::search_statutes))
        .route("/api/statutes/:id", get(api::statutes::get_statute));

    Router::new()
        .route("/health", get(api::health::health))
        .merge(api_routes)
        // Browser front-ends call the API directly
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
