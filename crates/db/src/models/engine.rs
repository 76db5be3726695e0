//! Engine and stage rows plus their mapping into the core nominal types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use effekt_core::catalog::{non_negative, Fuel, GearboxSpec, Stage, ValuePair};
use effekt_core::types::DbId;

/// A row from the `engines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EngineRow {
    pub id: DbId,
    pub year_id: DbId,
    pub label: String,
    pub slug: String,
    pub fuel: String,
}

impl EngineRow {
    pub fn fuel(&self) -> Fuel {
        Fuel::parse(&self.fuel)
    }
}

/// A row from the `stages` table, including the flattened gearbox
/// figure pairs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StageRow {
    pub id: DbId,
    pub engine_id: DbId,
    pub name: String,
    pub orig_hk: Option<i32>,
    pub tuned_hk: Option<i32>,
    pub orig_nm: Option<i32>,
    pub tuned_nm: Option<i32>,
    pub price: Option<i32>,
    pub launch_control_original: Option<i32>,
    pub launch_control_optimized: Option<i32>,
    pub rpm_limit_original: Option<i32>,
    pub rpm_limit_optimized: Option<i32>,
    pub shift_time_ms_original: Option<i32>,
    pub shift_time_ms_optimized: Option<i32>,
    pub description: Option<String>,
    pub sort_order: i32,
}

impl StageRow {
    /// Translate into the core [`Stage`] type, sanitizing negative
    /// source figures to "not available".
    pub fn into_stage(self) -> Stage {
        let pair = |original, optimized| match (original, optimized) {
            (None, None) => None,
            (original, optimized) => Some(ValuePair { original, optimized }),
        };
        let launch_control = pair(self.launch_control_original, self.launch_control_optimized);
        let rpm_limit = pair(self.rpm_limit_original, self.rpm_limit_optimized);
        let shift_time_ms = pair(self.shift_time_ms_original, self.shift_time_ms_optimized);

        let gearbox = if launch_control.is_some() || rpm_limit.is_some() || shift_time_ms.is_some()
        {
            Some(GearboxSpec {
                launch_control,
                rpm_limit,
                shift_time_ms,
            })
        } else {
            None
        };

        Stage {
            id: self.id,
            name: self.name,
            orig_hk: non_negative(self.orig_hk),
            tuned_hk: non_negative(self.tuned_hk),
            orig_nm: non_negative(self.orig_nm),
            tuned_nm: non_negative(self.tuned_nm),
            price: non_negative(self.price),
            gearbox,
            description: self.description,
        }
    }
}

/// DTO for seeding a new stage during catalog import.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CreateStage {
    pub orig_hk: Option<i32>,
    pub tuned_hk: Option<i32>,
    pub orig_nm: Option<i32>,
    pub tuned_nm: Option<i32>,
    pub price: Option<i32>,
}
