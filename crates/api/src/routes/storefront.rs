//! Route definitions for the `/storefront` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::storefront;
use crate::state::AppState;

/// Routes mounted at `/storefront`.
///
/// ```text
/// GET /{reseller_id}/brands/{brand}/{model}/{year}/{engine} -> get_engine
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{reseller_id}/brands/{brand}/{model}/{year}/{engine}",
        get(storefront::get_engine),
    )
}
