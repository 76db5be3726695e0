//! Health check handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// GET /health
///
/// Reports service status, crate version, and database reachability.
/// Always returns 200; a broken database shows up as `db_healthy: false`
/// so load balancers can distinguish "up but degraded" from "down".
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = effekt_db::health_check(&state.pool).await.is_ok();
    let status = if db_healthy { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}
