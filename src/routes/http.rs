// GET handlers: dashboard page, metrics snapshot, 404

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use super::AppState;

/// Embedded at build time; the page polls /api/metrics itself.
const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

/// GET / and GET /index.html
pub(super) async fn index_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/metrics — a fresh snapshot on every call, never cached.
pub(super) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.collector.collect_blocking().await)
}

pub(super) async fn not_found_handler() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
