//! Route definitions for the admin `/assets` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Routes mounted at `/assets`. All require an admin token.
///
/// ```text
/// POST /images -> upload_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/images", post(assets::upload_image))
}
