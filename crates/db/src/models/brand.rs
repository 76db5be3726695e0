//! Brand / model / year-range rows.

use serde::Serialize;
use sqlx::FromRow;

use effekt_core::types::{DbId, Timestamp};

/// A row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrandRow {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModelRow {
    pub id: DbId,
    pub brand_id: DbId,
    pub name: String,
    pub slug: String,
    pub sort_order: i32,
}

/// A row from the `model_years` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct YearRow {
    pub id: DbId,
    pub model_id: DbId,
    pub range_label: String,
    pub slug: String,
    pub sort_order: i32,
}
