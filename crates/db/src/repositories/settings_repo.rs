//! Repository for per-reseller settings documents.

use sqlx::PgPool;

use crate::models::reseller::{ResellerSettingsRow, UpdateResellerSettings};

pub struct SettingsRepo;

impl SettingsRepo {
    /// Settings for a reseller; absent rows fall back to defaults so a
    /// storefront without an explicit settings document still renders.
    pub async fn get_or_default(
        pool: &PgPool,
        reseller_id: &str,
    ) -> Result<ResellerSettingsRow, sqlx::Error> {
        let row = sqlx::query_as::<_, ResellerSettingsRow>(
            "SELECT reseller_id, display_name, show_addons, updated_at \
             FROM reseller_settings WHERE reseller_id = $1",
        )
        .bind(reseller_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.unwrap_or(ResellerSettingsRow {
            reseller_id: reseller_id.to_string(),
            display_name: None,
            show_addons: true,
            updated_at: chrono::Utc::now(),
        }))
    }

    /// Upsert-patch: only non-`None` fields change; a missing row is
    /// created with the given values over the defaults.
    pub async fn patch(
        pool: &PgPool,
        reseller_id: &str,
        input: &UpdateResellerSettings,
    ) -> Result<ResellerSettingsRow, sqlx::Error> {
        sqlx::query_as::<_, ResellerSettingsRow>(
            "INSERT INTO reseller_settings (reseller_id, display_name, show_addons) \
             VALUES ($1, $2, COALESCE($3, true)) \
             ON CONFLICT (reseller_id) DO UPDATE SET \
                display_name = COALESCE($2, reseller_settings.display_name), \
                show_addons = COALESCE($3, reseller_settings.show_addons), \
                updated_at = now() \
             RETURNING reseller_id, display_name, show_addons, updated_at",
        )
        .bind(reseller_id)
        .bind(&input.display_name)
        .bind(input.show_addons)
        .fetch_one(pool)
        .await
    }
}
