pub mod assets;
pub mod auth;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod import;
pub mod overrides;
pub mod preferences;
pub mod resellers;
pub mod storefront;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog/brands                                   brand list (public)
/// /catalog/brands/{brand}                           models + years for a brand
/// /catalog/brands/{brand}/{model}/{year}/{engine}   engine detail with stages
/// /catalog/stages/{id}/curve                        synthetic dyno curve
///
/// /storefront/{reseller_id}/brands/{brand}/{model}/{year}/{engine}
///                                                   engine detail with reseller
///                                                   overrides applied
///
/// /contact                                          submit contact request (POST)
/// /contact/recent                                   recent leads (admin)
///
/// /auth/login                                       admin login (public)
///
/// /overrides                                        create override (admin, POST)
/// /overrides/{id}                                   update, delete (admin)
/// /overrides/{reseller_id}                          list for reseller (admin)
/// /overrides/{reseller_id}/bulk                     replace scoped set (admin, PUT)
/// /overrides/{reseller_id}/descriptions             replace global descriptions
///                                                   (admin, PUT)
///
/// /resellers/{reseller_id}/settings                 get, patch (admin)
///
/// /import/catalog                                   vendor catalog import (admin, POST)
/// /import/history                                   past import runs (admin)
///
/// /assets/images                                    image upload (admin, POST)
///
/// /preferences/language                             get (public), put (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public catalog browsing.
        .nest("/catalog", catalog::router())
        // Reseller storefront views with override resolution.
        .nest("/storefront", storefront::router())
        // Visitor contact form + admin lead overview.
        .nest("/contact", contact::router())
        // Admin login.
        .nest("/auth", auth::router())
        // Reseller override documents (admin only).
        .nest("/overrides", overrides::router())
        // Reseller storefront settings (admin only).
        .nest("/resellers", resellers::router())
        // Bulk catalog import (admin only).
        .nest("/import", import::router())
        // Image uploads (admin only).
        .nest("/assets", assets::router())
        // UI preferences.
        .nest("/preferences", preferences::router())
}
