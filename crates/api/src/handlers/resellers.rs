//! Admin handlers for per-reseller settings documents.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use effekt_db::models::reseller::UpdateResellerSettings;
use effekt_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/resellers/{reseller_id}/settings
pub async fn get_settings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(reseller_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get_or_default(&state.pool, &reseller_id).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PATCH /api/v1/resellers/{reseller_id}/settings
pub async fn patch_settings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(reseller_id): Path<String>,
    Json(input): Json<UpdateResellerSettings>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::patch(&state.pool, &reseller_id, &input).await?;
    tracing::info!(reseller_id = %reseller_id, "Reseller settings updated");
    Ok(Json(DataResponse { data: settings }))
}
