//! Reseller storefront handlers: the public catalog view with that
//! reseller's overrides resolved into every stage.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use effekt_core::addons::applicable_addons;
use effekt_core::catalog::{AddOn, Fuel};
use effekt_core::overrides::{resolve_stage, ResellerOverride, StageScope};
use effekt_db::repositories::{AddonRepo, CatalogRepo, OverrideRepo, SettingsRepo};

use crate::error::AppResult;
use crate::handlers::catalog::{not_found, visitor_fetch, StageView};
use crate::response::DataResponse;
use crate::state::AppState;

/// Engine detail as one reseller's storefront shows it.
#[derive(Debug, Serialize)]
pub struct StorefrontEngineDetail {
    pub reseller_id: String,
    pub display_name: Option<String>,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub engine: String,
    pub fuel: Fuel,
    pub stages: Vec<StageView>,
}

/// GET /api/v1/storefront/{reseller_id}/brands/{brand}/{model}/{year}/{engine}
///
/// Engine detail with the reseller's overrides applied. Description
/// precedence per stage: specific override document, then the
/// reseller's global per-stage-name description, then the base text.
pub async fn get_engine(
    State(state): State<AppState>,
    Path((reseller_id, brand, model, year, engine)): Path<(
        String,
        String,
        String,
        String,
        String,
    )>,
) -> AppResult<impl IntoResponse> {
    let key = format!("{brand}/{model}/{year}/{engine}");
    let path = visitor_fetch(
        CatalogRepo::resolve_path(&state.pool, &brand, &model, &year, &engine).await,
        "Engine",
        &key,
    )?
    .ok_or_else(|| not_found("Engine", &key))?;

    let overrides: Vec<ResellerOverride> = visitor_fetch(
        OverrideRepo::list_for_reseller(&state.pool, &reseller_id).await,
        "Engine",
        &key,
    )?
    .into_iter()
    .map(|row| row.into_override())
    .collect();

    // Global descriptions (documents with no brand scope) keyed by
    // stage name; they sit between base text and specific overrides.
    let global_descriptions: HashMap<String, String> = overrides
        .iter()
        .filter(|ov| ov.brand.is_none())
        .filter_map(|ov| {
            ov.description
                .clone()
                .map(|desc| (ov.stage_name.clone(), desc))
        })
        .collect();

    let settings = visitor_fetch(
        SettingsRepo::get_or_default(&state.pool, &reseller_id).await,
        "Engine",
        &key,
    )?;

    let addons: Vec<AddOn> = if settings.show_addons {
        visitor_fetch(AddonRepo::list_all(&state.pool).await, "Engine", &key)?
    } else {
        Vec::new()
    };

    let scope = StageScope {
        brand: &path.brand.name,
        model: &path.model.name,
        year: &path.year.range_label,
        engine: &path.engine.label,
    };
    let fuel = path.engine.fuel();

    let mut stages = Vec::with_capacity(path.stages.len());
    for row in &path.stages {
        let mut base = row.clone().into_stage();
        if let Some(global) = global_descriptions.get(&base.name) {
            base.description = Some(global.clone());
        }

        let resolved = resolve_stage(&base, &scope, &overrides)?;
        let applicable = applicable_addons(&addons, path.engine.id, fuel, &resolved.name)
            .into_iter()
            .cloned()
            .collect();
        stages.push(StageView {
            stage: resolved,
            addons: applicable,
        });
    }

    Ok(Json(DataResponse {
        data: StorefrontEngineDetail {
            reseller_id,
            display_name: settings.display_name,
            brand: path.brand.name,
            model: path.model.name,
            year: path.year.range_label,
            engine: path.engine.label,
            fuel,
            stages,
        },
    }))
}
