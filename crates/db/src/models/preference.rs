//! Key-value preference rows.

use serde::Serialize;
use sqlx::FromRow;

use effekt_core::types::Timestamp;

/// A row from the `preferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PreferenceRow {
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}
