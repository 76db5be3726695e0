//! Read access to the catalog hierarchy.
//!
//! Route parameters are slugs; display names live on the rows and feed
//! override resolution, so both are returned together.

use sqlx::{FromRow, PgPool};

use effekt_core::import::RecordKey;
use effekt_core::types::DbId;

use crate::models::brand::{BrandRow, ModelRow, YearRow};
use crate::models::engine::{EngineRow, StageRow};

/// Column list for the `brands` table.
const BRAND_COLUMNS: &str = "id, name, slug, logo_url, sort_order, created_at, updated_at";

/// Column list for the `stages` table.
const STAGE_COLUMNS: &str = "id, engine_id, name, orig_hk, tuned_hk, orig_nm, tuned_nm, price, \
    launch_control_original, launch_control_optimized, rpm_limit_original, rpm_limit_optimized, \
    shift_time_ms_original, shift_time_ms_optimized, description, sort_order";

/// A fully resolved catalog path: the rows for each level plus the
/// engine's stages.
#[derive(Debug, Clone)]
pub struct EnginePath {
    pub brand: BrandRow,
    pub model: ModelRow,
    pub year: YearRow,
    pub engine: EngineRow,
    pub stages: Vec<StageRow>,
}

/// A stage joined with the display names of its catalog ancestors.
#[derive(Debug, Clone, FromRow)]
pub struct StageScopeRow {
    #[sqlx(flatten)]
    pub stage: StageRow,
    pub engine_label: String,
    pub engine_fuel: String,
    pub year_label: String,
    pub model_name: String,
    pub brand_name: String,
}

pub struct CatalogRepo;

impl CatalogRepo {
    /// List all brands in display order.
    pub async fn list_brands(pool: &PgPool) -> Result<Vec<BrandRow>, sqlx::Error> {
        let query = format!("SELECT {BRAND_COLUMNS} FROM brands ORDER BY sort_order, name");
        sqlx::query_as::<_, BrandRow>(&query).fetch_all(pool).await
    }

    pub async fn find_brand_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BrandRow>, sqlx::Error> {
        let query = format!("SELECT {BRAND_COLUMNS} FROM brands WHERE slug = $1");
        sqlx::query_as::<_, BrandRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_models(pool: &PgPool, brand_id: DbId) -> Result<Vec<ModelRow>, sqlx::Error> {
        sqlx::query_as::<_, ModelRow>(
            "SELECT id, brand_id, name, slug, sort_order FROM models \
             WHERE brand_id = $1 ORDER BY sort_order, name",
        )
        .bind(brand_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_years(pool: &PgPool, model_id: DbId) -> Result<Vec<YearRow>, sqlx::Error> {
        sqlx::query_as::<_, YearRow>(
            "SELECT id, model_id, range_label, slug, sort_order FROM model_years \
             WHERE model_id = $1 ORDER BY sort_order, range_label",
        )
        .bind(model_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_engines(pool: &PgPool, year_id: DbId) -> Result<Vec<EngineRow>, sqlx::Error> {
        sqlx::query_as::<_, EngineRow>(
            "SELECT id, year_id, label, slug, fuel FROM engines \
             WHERE year_id = $1 ORDER BY label",
        )
        .bind(year_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_stages(pool: &PgPool, engine_id: DbId) -> Result<Vec<StageRow>, sqlx::Error> {
        let query = format!(
            "SELECT {STAGE_COLUMNS} FROM stages WHERE engine_id = $1 ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, StageRow>(&query)
            .bind(engine_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve a slug path (brand/model/year/engine) to its rows.
    ///
    /// Returns `None` as soon as any level fails to resolve; callers
    /// surface that as a 404.
    pub async fn resolve_path(
        pool: &PgPool,
        brand_slug: &str,
        model_slug: &str,
        year_slug: &str,
        engine_slug: &str,
    ) -> Result<Option<EnginePath>, sqlx::Error> {
        let Some(brand) = Self::find_brand_by_slug(pool, brand_slug).await? else {
            return Ok(None);
        };

        let model = sqlx::query_as::<_, ModelRow>(
            "SELECT id, brand_id, name, slug, sort_order FROM models \
             WHERE brand_id = $1 AND slug = $2",
        )
        .bind(brand.id)
        .bind(model_slug)
        .fetch_optional(pool)
        .await?;
        let Some(model) = model else { return Ok(None) };

        let year = sqlx::query_as::<_, YearRow>(
            "SELECT id, model_id, range_label, slug, sort_order FROM model_years \
             WHERE model_id = $1 AND slug = $2",
        )
        .bind(model.id)
        .bind(year_slug)
        .fetch_optional(pool)
        .await?;
        let Some(year) = year else { return Ok(None) };

        let engine = sqlx::query_as::<_, EngineRow>(
            "SELECT id, year_id, label, slug, fuel FROM engines \
             WHERE year_id = $1 AND slug = $2",
        )
        .bind(year.id)
        .bind(engine_slug)
        .fetch_optional(pool)
        .await?;
        let Some(engine) = engine else { return Ok(None) };

        let stages = Self::list_stages(pool, engine.id).await?;

        Ok(Some(EnginePath {
            brand,
            model,
            year,
            engine,
            stages,
        }))
    }

    /// Find a stage by id, joined with its ancestor display names (for
    /// override scoping and dyno fuel selection).
    pub async fn find_stage_scope(
        pool: &PgPool,
        stage_id: DbId,
    ) -> Result<Option<StageScopeRow>, sqlx::Error> {
        sqlx::query_as::<_, StageScopeRow>(
            "SELECT s.id, s.engine_id, s.name, s.orig_hk, s.tuned_hk, s.orig_nm, s.tuned_nm, \
                    s.price, s.launch_control_original, s.launch_control_optimized, \
                    s.rpm_limit_original, s.rpm_limit_optimized, \
                    s.shift_time_ms_original, s.shift_time_ms_optimized, \
                    s.description, s.sort_order, \
                    e.label AS engine_label, e.fuel AS engine_fuel, \
                    y.range_label AS year_label, m.name AS model_name, b.name AS brand_name \
             FROM stages s \
             JOIN engines e ON e.id = s.engine_id \
             JOIN model_years y ON y.id = e.year_id \
             JOIN models m ON m.id = y.model_id \
             JOIN brands b ON b.id = m.brand_id \
             WHERE s.id = $1",
        )
        .bind(stage_id)
        .fetch_optional(pool)
        .await
    }

    /// Normalized identity keys of every engine in the store, for the
    /// import duplicate check.
    pub async fn existing_engine_keys(pool: &PgPool) -> Result<Vec<RecordKey>, sqlx::Error> {
        let rows: Vec<(String, String, String, String)> = sqlx::query_as(
            "SELECT b.name, m.name, y.range_label, e.label \
             FROM engines e \
             JOIN model_years y ON y.id = e.year_id \
             JOIN models m ON m.id = y.model_id \
             JOIN brands b ON b.id = m.brand_id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .iter()
            .map(|(brand, model, year, engine)| RecordKey::new(brand, model, year, engine))
            .collect())
    }
}
