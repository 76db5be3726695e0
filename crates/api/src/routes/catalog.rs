//! Route definitions for the public `/catalog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET /brands                                   -> list_brands
/// GET /brands/{brand}                           -> get_brand
/// GET /brands/{brand}/{model}/{year}/{engine}   -> get_engine
/// GET /stages/{id}/curve                        -> get_stage_curve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brands", get(catalog::list_brands))
        .route("/brands/{brand}", get(catalog::get_brand))
        .route(
            "/brands/{brand}/{model}/{year}/{engine}",
            get(catalog::get_engine),
        )
        .route("/stages/{id}/curve", get(catalog::get_stage_curve))
}
