//! AKT+ option rows.

use serde::Serialize;
use sqlx::FromRow;

use effekt_core::catalog::{non_negative, AddOn, Fuel};
use effekt_core::types::DbId;

/// A row from the `addons` table. Explicit engine references come from
/// the `addon_engines` junction table and are attached separately.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AddonRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub universal: bool,
    pub fuels: Vec<String>,
    pub stage_name: Option<String>,
}

impl AddonRow {
    pub fn into_addon(self, engine_ids: Vec<DbId>) -> AddOn {
        AddOn {
            id: self.id,
            title: self.title,
            description: self.description,
            price: non_negative(self.price),
            universal: self.universal,
            fuels: self.fuels.iter().map(|f| Fuel::parse(f)).collect(),
            stage_name: self.stage_name,
            engine_ids,
        }
    }
}
