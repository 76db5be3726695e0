//! Admin handlers for reseller override documents.
//!
//! Single-document CRUD plus the two wholesale-replace flows (bulk
//! overrides, global descriptions), which are transactional in the
//! repository so a failed save never leaves a reseller half-migrated.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use effekt_core::error::CoreError;
use effekt_core::types::DbId;
use effekt_db::models::reseller::{CreateOverride, StageDescription, UpdateOverride};
use effekt_db::repositories::OverrideRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_scope(input: &CreateOverride) -> Result<(), AppError> {
    if input.reseller_id.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "reseller_id must not be empty".into(),
        )));
    }
    if input.stage_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "stage_name must not be empty".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/overrides/{reseller_id}
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(reseller_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let overrides = OverrideRepo::list_for_reseller(&state.pool, &reseller_id).await?;
    Ok(Json(DataResponse { data: overrides }))
}

/// POST /api/v1/overrides
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateOverride>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&input)?;
    let created = OverrideRepo::create(&state.pool, &input).await?;
    tracing::info!(
        override_id = created.id,
        reseller_id = %created.reseller_id,
        stage_name = %created.stage_name,
        "Override document created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PATCH /api/v1/overrides/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOverride>,
) -> AppResult<impl IntoResponse> {
    let updated = OverrideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Override",
            key: id.to_string(),
        }))?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/overrides/{id}
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if OverrideRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Override",
            key: id.to_string(),
        }))
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkOverrides {
    pub documents: Vec<CreateOverride>,
}

/// PUT /api/v1/overrides/{reseller_id}/bulk
///
/// Replace the reseller's entire scoped override set in one transaction.
pub async fn replace_bulk(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(reseller_id): Path<String>,
    Json(input): Json<BulkOverrides>,
) -> AppResult<impl IntoResponse> {
    for doc in &input.documents {
        validate_scope(doc)?;
        if doc.brand.is_none() {
            return Err(AppError::Core(CoreError::Validation(
                "Bulk override documents must carry a brand scope".into(),
            )));
        }
    }

    let created = OverrideRepo::replace_all(&state.pool, &reseller_id, &input.documents).await?;
    tracing::info!(
        reseller_id = %reseller_id,
        count = created.len(),
        "Bulk override set replaced",
    );
    Ok(Json(DataResponse { data: created }))
}

#[derive(Debug, Deserialize)]
pub struct GlobalDescriptions {
    pub descriptions: Vec<StageDescription>,
}

/// PUT /api/v1/overrides/{reseller_id}/descriptions
///
/// Replace the reseller's global per-stage-name descriptions in one
/// transaction.
pub async fn replace_descriptions(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(reseller_id): Path<String>,
    Json(input): Json<GlobalDescriptions>,
) -> AppResult<impl IntoResponse> {
    for desc in &input.descriptions {
        if desc.stage_name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "stage_name must not be empty".into(),
            )));
        }
    }

    let created =
        OverrideRepo::replace_descriptions(&state.pool, &reseller_id, &input.descriptions).await?;
    Ok(Json(DataResponse { data: created }))
}
