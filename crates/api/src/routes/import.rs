//! Route definitions for the admin `/import` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::import;
use crate::state::AppState;

/// Routes mounted at `/import`. All require an admin token.
///
/// ```text
/// POST /catalog -> import_catalog
/// GET  /history -> import_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", post(import::import_catalog))
        .route("/history", get(import::import_history))
}
