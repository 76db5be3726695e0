//! Repository for the key-value `preferences` table, plus the
//! Postgres-backed implementation of the core preference port.

use async_trait::async_trait;
use sqlx::PgPool;

use effekt_core::error::CoreError;
use effekt_core::prefs::PreferenceStore;

use crate::models::preference::PreferenceRow;

pub struct PreferenceRepo;

impl PreferenceRepo {
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM preferences WHERE key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    pub async fn set(pool: &PgPool, key: &str, value: &str) -> Result<PreferenceRow, sqlx::Error> {
        sqlx::query_as::<_, PreferenceRow>(
            "INSERT INTO preferences (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = now() \
             RETURNING key, value, updated_at",
        )
        .bind(key)
        .bind(value)
        .fetch_one(pool)
        .await
    }
}

/// [`PreferenceStore`] backed by the `preferences` table.
#[derive(Clone)]
pub struct PgPreferenceStore {
    pool: PgPool,
}

impl PgPreferenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceStore for PgPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        PreferenceRepo::get(&self.pool, key)
            .await
            .map_err(|e| CoreError::Internal(format!("preference read failed: {e}")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        PreferenceRepo::set(&self.pool, key, value)
            .await
            .map(|_| ())
            .map_err(|e| CoreError::Internal(format!("preference write failed: {e}")))
    }
}
