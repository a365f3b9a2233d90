// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::timeline::PanelOptions;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) options: PanelOptions,
}

pub fn app(config: AppConfig) -> Router {
    let state = AppState {
        options: config.panel.options(),
    };
    Router::new()
        .route("/", get(|| async { "ECharts: Hello from Rust gpu-timeline!" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/timeline", post(http::timeline_handler)) // POST /api/timeline
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
