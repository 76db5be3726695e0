//! Route definitions for the `/contact` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /         -> submit_contact (public)
/// GET  /recent   -> recent_leads (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit_contact))
        .route("/recent", get(contact::recent_leads))
}
