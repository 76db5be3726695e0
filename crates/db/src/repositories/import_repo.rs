//! Write access used by the bulk catalog importer.
//!
//! Brands are never auto-created; model / year / engine / seed-stage
//! levels are. The engine plus its seed stage is inserted in a single
//! transaction so a failed record leaves nothing behind.

use sqlx::PgPool;

use effekt_core::types::DbId;

use crate::models::engine::{CreateStage, EngineRow};

pub struct ImportRepo;

impl ImportRepo {
    pub async fn create_model(
        pool: &PgPool,
        brand_id: DbId,
        name: &str,
        slug: &str,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO models (brand_id, name, slug) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(brand_id)
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    pub async fn create_year(
        pool: &PgPool,
        model_id: DbId,
        range_label: &str,
        slug: &str,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO model_years (model_id, range_label, slug) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(model_id)
        .bind(range_label)
        .bind(slug)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Create an engine and its seed stage in one transaction.
    ///
    /// The seed stage is named by `stage_name` ("Steg 1" for imported
    /// records); `seed` being `None` creates the engine with no stages.
    pub async fn create_engine_with_stage(
        pool: &PgPool,
        year_id: DbId,
        label: &str,
        slug: &str,
        fuel: &str,
        stage_name: &str,
        seed: Option<CreateStage>,
    ) -> Result<EngineRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let engine = sqlx::query_as::<_, EngineRow>(
            "INSERT INTO engines (year_id, label, slug, fuel) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, year_id, label, slug, fuel",
        )
        .bind(year_id)
        .bind(label)
        .bind(slug)
        .bind(fuel)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(seed) = seed {
            sqlx::query(
                "INSERT INTO stages (engine_id, name, orig_hk, tuned_hk, orig_nm, tuned_nm, price) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(engine.id)
            .bind(stage_name)
            .bind(seed.orig_hk)
            .bind(seed.tuned_hk)
            .bind(seed.orig_nm)
            .bind(seed.tuned_nm)
            .bind(seed.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(engine)
    }
}
