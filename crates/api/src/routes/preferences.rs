//! Route definitions for the `/preferences` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::preferences;
use crate::state::AppState;

/// Routes mounted at `/preferences`.
///
/// ```text
/// GET /language -> get_language
/// PUT /language -> set_language   (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/language",
        get(preferences::get_language).put(preferences::set_language),
    )
}
