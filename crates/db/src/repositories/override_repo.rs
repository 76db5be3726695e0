//! Repository for the `reseller_overrides` table.
//!
//! Single-document create/patch/delete plus the two delete-all-then-
//! recreate flows (bulk override save, global description save). The
//! replace flows run inside one transaction: either the new document
//! set lands completely or the old set stays.

use sqlx::{PgPool, Postgres, Transaction};

use effekt_core::types::DbId;

use crate::models::reseller::{
    CreateOverride, ResellerOverrideRow, StageDescription, UpdateOverride,
};

/// Column list for the `reseller_overrides` table.
const COLUMNS: &str = "id, reseller_id, brand, model, year_range, engine, stage_name, \
    price, tuned_hk, tuned_nm, description, created_at, updated_at";

pub struct OverrideRepo;

impl OverrideRepo {
    /// All override documents for a reseller, newest first.
    pub async fn list_for_reseller(
        pool: &PgPool,
        reseller_id: &str,
    ) -> Result<Vec<ResellerOverrideRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reseller_overrides \
             WHERE reseller_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ResellerOverrideRow>(&query)
            .bind(reseller_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a single override document. The `uq_reseller_override_scope`
    /// index rejects a second document with the same scope.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOverride,
    ) -> Result<ResellerOverrideRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO reseller_overrides \
                (reseller_id, brand, model, year_range, engine, stage_name, \
                 price, tuned_hk, tuned_nm, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ResellerOverrideRow>(&query)
            .bind(&input.reseller_id)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(&input.year_range)
            .bind(&input.engine)
            .bind(&input.stage_name)
            .bind(input.price)
            .bind(input.tuned_hk)
            .bind(input.tuned_nm)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Patch value fields; only non-`None` fields are applied. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOverride,
    ) -> Result<Option<ResellerOverrideRow>, sqlx::Error> {
        let query = format!(
            "UPDATE reseller_overrides SET \
                price = COALESCE($2, price), \
                tuned_hk = COALESCE($3, tuned_hk), \
                tuned_nm = COALESCE($4, tuned_nm), \
                description = COALESCE($5, description), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ResellerOverrideRow>(&query)
            .bind(id)
            .bind(input.price)
            .bind(input.tuned_hk)
            .bind(input.tuned_nm)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reseller_overrides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Transactional replace of a reseller's entire scoped override set.
    ///
    /// Global description documents (brand absent) are left alone; they
    /// have their own replace flow.
    pub async fn replace_all(
        pool: &PgPool,
        reseller_id: &str,
        documents: &[CreateOverride],
    ) -> Result<Vec<ResellerOverrideRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM reseller_overrides WHERE reseller_id = $1 AND brand IS NOT NULL")
            .bind(reseller_id)
            .execute(&mut *tx)
            .await?;

        let mut created = Vec::with_capacity(documents.len());
        for doc in documents {
            created.push(Self::insert_inner(&mut tx, reseller_id, doc).await?);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Transactional replace of a reseller's global per-stage-name
    /// descriptions (documents with no brand scope).
    pub async fn replace_descriptions(
        pool: &PgPool,
        reseller_id: &str,
        descriptions: &[StageDescription],
    ) -> Result<Vec<ResellerOverrideRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM reseller_overrides WHERE reseller_id = $1 AND brand IS NULL")
            .bind(reseller_id)
            .execute(&mut *tx)
            .await?;

        let mut created = Vec::with_capacity(descriptions.len());
        for desc in descriptions {
            let doc = CreateOverride {
                reseller_id: reseller_id.to_string(),
                brand: None,
                model: None,
                year_range: None,
                engine: None,
                stage_name: desc.stage_name.clone(),
                price: None,
                tuned_hk: None,
                tuned_nm: None,
                description: Some(desc.description.clone()),
            };
            created.push(Self::insert_inner(&mut tx, reseller_id, &doc).await?);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Global descriptions for a reseller, keyed by stage name.
    pub async fn list_global_descriptions(
        pool: &PgPool,
        reseller_id: &str,
    ) -> Result<Vec<ResellerOverrideRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reseller_overrides \
             WHERE reseller_id = $1 AND brand IS NULL ORDER BY stage_name"
        );
        sqlx::query_as::<_, ResellerOverrideRow>(&query)
            .bind(reseller_id)
            .fetch_all(pool)
            .await
    }

    async fn insert_inner(
        tx: &mut Transaction<'_, Postgres>,
        reseller_id: &str,
        doc: &CreateOverride,
    ) -> Result<ResellerOverrideRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO reseller_overrides \
                (reseller_id, brand, model, year_range, engine, stage_name, \
                 price, tuned_hk, tuned_nm, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ResellerOverrideRow>(&query)
            .bind(reseller_id)
            .bind(&doc.brand)
            .bind(&doc.model)
            .bind(&doc.year_range)
            .bind(&doc.engine)
            .bind(&doc.stage_name)
            .bind(doc.price)
            .bind(doc.tuned_hk)
            .bind(doc.tuned_nm)
            .bind(&doc.description)
            .fetch_one(&mut **tx)
            .await
    }
}
