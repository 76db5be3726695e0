//! Admin handlers for the bulk catalog importer.
//!
//! Records are processed sequentially and independently: one bad record
//! reports an `error` status and the batch keeps going. Import is an
//! infrequent, human-initiated action, so there is no batching or
//! parallelism here on purpose.

use std::collections::{HashMap, HashSet};

use anyhow::{anyhow, Context};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use sqlx::PgPool;

use effekt_core::catalog::Fuel;
use effekt_core::import::{
    flatten, plan, Disposition, ImportCounts, ImportRecord, ImportStatus, VendorCatalog,
};
use effekt_core::normalize::{normalize_name, normalize_year_range, slugify};
use effekt_core::prefs;
use effekt_core::types::DbId;
use effekt_db::models::engine::CreateStage;
use effekt_db::repositories::{CatalogRepo, ImportRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Name given to the seed stage of every imported engine.
const SEED_STAGE_NAME: &str = "Steg 1";

/// Per-record outcome reported to the admin UI.
#[derive(Debug, Serialize)]
pub struct RecordResult {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub engine: String,
    #[serde(flatten)]
    pub status: ImportStatus,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub results: Vec<RecordResult>,
    pub counts: ImportCounts,
}

/// POST /api/v1/import/catalog
///
/// Import a vendor catalog file: records whose normalized identity is
/// new get a model/year path and an engine seeded with a "Steg 1"
/// stage. Brands are never auto-created.
pub async fn import_catalog(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(catalog): Json<VendorCatalog>,
) -> AppResult<impl IntoResponse> {
    let records = flatten(&catalog);

    let existing: HashSet<_> = CatalogRepo::existing_engine_keys(&state.pool)
        .await?
        .into_iter()
        .collect();

    // Brand lookup by normalized display name, resolved once up front.
    let brands: HashMap<String, DbId> = CatalogRepo::list_brands(&state.pool)
        .await?
        .into_iter()
        .map(|b| (normalize_name(&b.name), b.id))
        .collect();

    let mut results = Vec::with_capacity(records.len());
    for (record, disposition) in plan(&records, &existing) {
        let status = match disposition {
            Disposition::Exists => ImportStatus::Exists,
            Disposition::Create => match apply_record(&state.pool, &brands, &record).await {
                Ok(()) => ImportStatus::Created,
                Err(err) => {
                    tracing::warn!(
                        brand = %record.brand,
                        model = %record.model,
                        engine = %record.engine,
                        error = %err,
                        "Import record failed",
                    );
                    ImportStatus::Error(err.to_string())
                }
            },
        };
        results.push(RecordResult {
            brand: record.brand,
            model: record.model,
            year: record.year,
            engine: record.engine,
            status,
        });
    }

    let counts = ImportCounts::tally(
        &results.iter().map(|r| r.status.clone()).collect::<Vec<_>>(),
    );

    let history_line = format!(
        "{}: {} created, {} exists, {} errors",
        chrono::Utc::now().to_rfc3339(),
        counts.created,
        counts.exists,
        counts.errors,
    );
    if let Err(err) = prefs::append_import_history(state.prefs.as_ref(), &history_line).await {
        // History is bookkeeping; a failed append must not fail the import.
        tracing::warn!(error = %err, "Failed to record import history");
    }

    tracing::info!(
        created = counts.created,
        exists = counts.exists,
        errors = counts.errors,
        "Catalog import finished",
    );

    Ok(Json(DataResponse {
        data: ImportResponse { results, counts },
    }))
}

/// GET /api/v1/import/history
pub async fn import_history(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let history = state
        .prefs
        .get(prefs::KEY_IMPORT_HISTORY)
        .await
        .map_err(AppError::Core)?
        .unwrap_or_default();

    let lines: Vec<&str> = history.lines().collect();
    Ok(Json(DataResponse {
        data: serde_json::json!({ "entries": lines }),
    }))
}

/// Create the model/year/engine path for one planned record.
///
/// Model and year nodes are reused when a normalized-name match exists;
/// the engine is known to be new (the duplicate check ran already).
async fn apply_record(
    pool: &PgPool,
    brands: &HashMap<String, DbId>,
    record: &ImportRecord,
) -> anyhow::Result<()> {
    let brand_id = *brands
        .get(&normalize_name(&record.brand))
        .ok_or_else(|| anyhow!("brand not found: {}", record.brand))?;

    let model_key = normalize_name(&record.model);
    let model_id = match CatalogRepo::list_models(pool, brand_id)
        .await?
        .into_iter()
        .find(|m| normalize_name(&m.name) == model_key)
    {
        Some(model) => model.id,
        None => ImportRepo::create_model(pool, brand_id, &record.model, &slugify(&record.model))
            .await
            .context("failed to create model")?,
    };

    let year_key = normalize_year_range(&record.year);
    let year_id = match CatalogRepo::list_years(pool, model_id)
        .await?
        .into_iter()
        .find(|y| normalize_year_range(&y.range_label) == year_key)
    {
        Some(year) => year.id,
        None => ImportRepo::create_year(pool, model_id, &record.year, &slugify(&record.year))
            .await
            .context("failed to create year")?,
    };

    let fuel = Fuel::parse(record.fuel.as_deref().unwrap_or_default());
    let seed = record.seed_stage.map(|s| CreateStage {
        orig_hk: s.orig_hk,
        tuned_hk: s.tuned_hk,
        orig_nm: s.orig_nm,
        tuned_nm: s.tuned_nm,
        price: s.price,
    });

    ImportRepo::create_engine_with_stage(
        pool,
        year_id,
        &record.engine,
        &slugify(&record.engine),
        fuel.as_str(),
        SEED_STAGE_NAME,
        seed,
    )
    .await
    .context("failed to create engine")?;

    Ok(())
}
