//! Reseller override and settings rows plus their create/patch DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use effekt_core::overrides::ResellerOverride;
use effekt_core::types::{DbId, Timestamp};

/// A row from the `reseller_overrides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResellerOverrideRow {
    pub id: DbId,
    pub reseller_id: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_range: Option<String>,
    pub engine: Option<String>,
    pub stage_name: String,
    pub price: Option<i32>,
    pub tuned_hk: Option<i32>,
    pub tuned_nm: Option<i32>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResellerOverrideRow {
    pub fn into_override(self) -> ResellerOverride {
        ResellerOverride {
            id: self.id,
            reseller_id: self.reseller_id,
            brand: self.brand,
            model: self.model,
            year: self.year_range,
            engine: self.engine,
            stage_name: self.stage_name,
            price: self.price,
            tuned_hk: self.tuned_hk,
            tuned_nm: self.tuned_nm,
            description: self.description,
        }
    }
}

/// DTO for creating an override document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOverride {
    pub reseller_id: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_range: Option<String>,
    pub engine: Option<String>,
    pub stage_name: String,
    pub price: Option<i32>,
    pub tuned_hk: Option<i32>,
    pub tuned_nm: Option<i32>,
    pub description: Option<String>,
}

/// DTO for patching value fields on an existing override. Scope fields
/// are immutable; delete and recreate to re-scope a document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOverride {
    pub price: Option<i32>,
    pub tuned_hk: Option<i32>,
    pub tuned_nm: Option<i32>,
    pub description: Option<String>,
}

/// One stage-name/description pair for the global-description replace
/// flow.
#[derive(Debug, Clone, Deserialize)]
pub struct StageDescription {
    pub stage_name: String,
    pub description: String,
}

/// A row from the `reseller_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResellerSettingsRow {
    pub reseller_id: String,
    pub display_name: Option<String>,
    pub show_addons: bool,
    pub updated_at: Timestamp,
}

/// DTO for patching reseller settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResellerSettings {
    pub display_name: Option<String>,
    pub show_addons: Option<bool>,
}
