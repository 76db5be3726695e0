//! Route definitions for the admin `/resellers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resellers;
use crate::state::AppState;

/// Routes mounted at `/resellers`. All require an admin token.
///
/// ```text
/// GET   /{reseller_id}/settings -> get_settings
/// PATCH /{reseller_id}/settings -> patch_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{reseller_id}/settings",
        get(resellers::get_settings).patch(resellers::patch_settings),
    )
}
