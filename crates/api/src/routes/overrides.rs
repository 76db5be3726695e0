//! Route definitions for the admin `/overrides` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::overrides;
use crate::state::AppState;

/// Routes mounted at `/overrides`. All require an admin token.
///
/// ```text
/// POST   /                             -> create
/// GET    /{reseller_id}                -> list
/// PATCH  /{id}                         -> update
/// DELETE /{id}                         -> remove
/// PUT    /{reseller_id}/bulk           -> replace_bulk
/// PUT    /{reseller_id}/descriptions   -> replace_descriptions
/// ```
///
/// `GET /{reseller_id}` and `PATCH|DELETE /{id}` share a path segment;
/// the list keys on reseller id, the mutations on the document id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(overrides::create))
        .route(
            "/{id}",
            get(overrides::list)
                .patch(overrides::update)
                .delete(overrides::remove),
        )
        .route("/{id}/bulk", put(overrides::replace_bulk))
        .route("/{id}/descriptions", put(overrides::replace_descriptions))
}
