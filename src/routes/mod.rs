// HTTP routes: static dashboard page + JSON metrics

mod http;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::collector::MetricsCollector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: MetricsCollector,
}

pub fn app(collector: MetricsCollector) -> Router {
    let state = AppState { collector };
    // Only the JSON endpoint is cross-origin readable.
    let api = Router::new()
        .route("/api/metrics", get(http::metrics_handler)) // GET /api/metrics
        .layer(CorsLayer::new().allow_origin(Any));
    Router::new()
        .route("/", get(http::index_handler)) // GET /
        .route("/index.html", get(http::index_handler)) // GET /index.html
        .merge(api)
        .fallback(http::not_found_handler)
        .with_state(state)
}
