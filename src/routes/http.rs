// Handlers: version, timeline transform

use axum::{Json, extract::State, response::IntoResponse};

use super::AppState;
use crate::models::{ChartConfig, QueryData};
use crate::timeline;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /api/timeline — query frames in, chart option out. Total for any
/// payload the extractor accepts; missing utilization data yields the
/// waiting placeholder, not an error.
pub(super) async fn timeline_handler(
    State(state): State<AppState>,
    Json(query): Json<QueryData>,
) -> Json<ChartConfig> {
    let chart = timeline::build_chart(&query, &state.options);
    let bars = chart.series.first().map(|s| s.data.len()).unwrap_or(0);
    tracing::info!(frames = query.series.len(), bars, "timeline request");
    Json(chart)
}
