//! Visitor-facing catalog handlers.
//!
//! Per the error-handling policy, upstream fetch failures on these
//! routes are logged server-side and surfaced to the visitor as
//! not-found rather than a 500, so backend detail never leaks into a
//! public page.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use effekt_core::addons::applicable_addons;
use effekt_core::catalog::{AddOn, Fuel, Stage};
use effekt_core::dyno;
use effekt_core::error::CoreError;
use effekt_core::types::DbId;
use effekt_db::models::brand::BrandRow;
use effekt_db::repositories::{AddonRepo, CatalogRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// A stage with the AKT+ options applicable to it.
#[derive(Debug, Serialize)]
pub struct StageView {
    #[serde(flatten)]
    pub stage: Stage,
    pub addons: Vec<AddOn>,
}

/// Full engine detail for a resolved catalog path.
#[derive(Debug, Serialize)]
pub struct EngineDetail {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub engine: String,
    pub fuel: Fuel,
    pub stages: Vec<StageView>,
}

/// A model with its year ranges, for the brand page.
#[derive(Debug, Serialize)]
pub struct ModelView {
    pub name: String,
    pub slug: String,
    pub years: Vec<YearView>,
}

#[derive(Debug, Serialize)]
pub struct YearView {
    pub range: String,
    pub slug: String,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Convert a visitor-facing fetch result: errors are logged and become
/// not-found instead of surfacing a 500 to the public page.
pub(crate) fn visitor_fetch<T>(
    result: Result<T, sqlx::Error>,
    entity: &'static str,
    key: &str,
) -> AppResult<T> {
    result.map_err(|err| {
        tracing::error!(error = %err, entity, key, "Catalog fetch failed");
        AppError::Core(CoreError::NotFound {
            entity,
            key: key.to_string(),
        })
    })
}

pub(crate) fn not_found(entity: &'static str, key: impl Into<String>) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        key: key.into(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog/brands
pub async fn list_brands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands: Vec<BrandRow> =
        visitor_fetch(CatalogRepo::list_brands(&state.pool).await, "Catalog", "brands")?;
    Ok(Json(DataResponse { data: brands }))
}

/// GET /api/v1/catalog/brands/{brand}
///
/// Brand detail: its models and their year ranges.
pub async fn get_brand(
    State(state): State<AppState>,
    Path(brand_slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let brand = visitor_fetch(
        CatalogRepo::find_brand_by_slug(&state.pool, &brand_slug).await,
        "Brand",
        &brand_slug,
    )?
    .ok_or_else(|| not_found("Brand", &brand_slug))?;

    let models = visitor_fetch(
        CatalogRepo::list_models(&state.pool, brand.id).await,
        "Brand",
        &brand_slug,
    )?;

    let mut views = Vec::with_capacity(models.len());
    for model in models {
        let years = visitor_fetch(
            CatalogRepo::list_years(&state.pool, model.id).await,
            "Brand",
            &brand_slug,
        )?;
        views.push(ModelView {
            name: model.name,
            slug: model.slug,
            years: years
                .into_iter()
                .map(|y| YearView {
                    range: y.range_label,
                    slug: y.slug,
                })
                .collect(),
        });
    }

    Ok(Json(DataResponse {
        data: serde_json::json!({
            "name": brand.name,
            "slug": brand.slug,
            "logo_url": brand.logo_url,
            "models": views,
        }),
    }))
}

/// GET /api/v1/catalog/brands/{brand}/{model}/{year}/{engine}
///
/// Engine detail: stages with their applicable AKT+ options.
pub async fn get_engine(
    State(state): State<AppState>,
    Path((brand, model, year, engine)): Path<(String, String, String, String)>,
) -> AppResult<impl IntoResponse> {
    let key = format!("{brand}/{model}/{year}/{engine}");
    let path = visitor_fetch(
        CatalogRepo::resolve_path(&state.pool, &brand, &model, &year, &engine).await,
        "Engine",
        &key,
    )?
    .ok_or_else(|| not_found("Engine", &key))?;

    let addons = visitor_fetch(AddonRepo::list_all(&state.pool).await, "Engine", &key)?;
    let detail = engine_detail(&path, &addons);
    Ok(Json(DataResponse { data: detail }))
}

/// Assemble the engine view shared by the public catalog and the
/// reseller storefront.
pub(crate) fn engine_detail(
    path: &effekt_db::repositories::catalog_repo::EnginePath,
    addons: &[AddOn],
) -> EngineDetail {
    let fuel = path.engine.fuel();
    let stages = path
        .stages
        .iter()
        .cloned()
        .map(|row| {
            let stage = row.into_stage();
            let applicable = applicable_addons(addons, path.engine.id, fuel, &stage.name)
                .into_iter()
                .cloned()
                .collect();
            StageView {
                stage,
                addons: applicable,
            }
        })
        .collect();

    EngineDetail {
        brand: path.brand.name.clone(),
        model: path.model.name.clone(),
        year: path.year.range_label.clone(),
        engine: path.engine.label.clone(),
        fuel,
        stages,
    }
}

// ---------------------------------------------------------------------------
// Dyno curve
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CurveParams {
    /// `hk` (horsepower, default) or `nm` (torque).
    pub kind: Option<String>,
    /// Use the tuned figure (default) or the original one.
    pub tuned: Option<bool>,
}

/// GET /api/v1/catalog/stages/{id}/curve
///
/// Chart points for the synthetic dyno curve of one stage figure.
pub async fn get_stage_curve(
    State(state): State<AppState>,
    Path(stage_id): Path<DbId>,
    Query(params): Query<CurveParams>,
) -> AppResult<impl IntoResponse> {
    let scope = visitor_fetch(
        CatalogRepo::find_stage_scope(&state.pool, stage_id).await,
        "Stage",
        &stage_id.to_string(),
    )?
    .ok_or_else(|| not_found("Stage", stage_id.to_string()))?;

    let stage = scope.stage.into_stage();
    let tuned = params.tuned.unwrap_or(true);
    let kind = params.kind.as_deref().unwrap_or("hk");

    let (peak, is_horsepower) = match kind {
        "hk" => (if tuned { stage.tuned_hk } else { stage.orig_hk }, true),
        "nm" => (if tuned { stage.tuned_nm } else { stage.orig_nm }, false),
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown curve kind '{other}'. Expected 'hk' or 'nm'"
            )))
        }
    };

    let peak = peak.ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Stage '{}' has no {kind} figure to chart",
            stage.name
        )))
    })?;

    let points = dyno::curve(f64::from(peak), is_horsepower, Fuel::parse(&scope.engine_fuel));
    Ok(Json(DataResponse { data: points }))
}
