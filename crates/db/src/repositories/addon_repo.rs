//! Repository for AKT+ options.

use std::collections::HashMap;

use sqlx::PgPool;

use effekt_core::catalog::AddOn;
use effekt_core::types::DbId;

use crate::models::addon::AddonRow;

pub struct AddonRepo;

impl AddonRepo {
    /// Load every option with its explicit engine references attached,
    /// ready for the pure applicability predicate.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AddOn>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AddonRow>(
            "SELECT id, title, description, price, universal, fuels, stage_name \
             FROM addons ORDER BY title",
        )
        .fetch_all(pool)
        .await?;

        let links: Vec<(DbId, DbId)> =
            sqlx::query_as("SELECT addon_id, engine_id FROM addon_engines")
                .fetch_all(pool)
                .await?;

        let mut by_addon: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for (addon_id, engine_id) in links {
            by_addon.entry(addon_id).or_default().push(engine_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let engine_ids = by_addon.remove(&row.id).unwrap_or_default();
                row.into_addon(engine_ids)
            })
            .collect())
    }
}
