//! Nominal catalog types: brand → model → year → engine → stage.
//!
//! The content store delivers loosely-typed rows; the `effekt-db` crate
//! maps them into these types at the boundary so everything downstream
//! (override resolution, addon matching, the API surface) operates on
//! well-formed data only.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Engine fuel classification. Drives the dyno RPM axis and AKT+ option
/// applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fuel {
    Petrol,
    Diesel,
    Hybrid,
    Other,
}

impl Fuel {
    /// Parse the fuel string stored in the content store. Unrecognised
    /// values map to [`Fuel::Other`] rather than failing the whole page.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "petrol" | "bensin" | "gasoline" => Self::Petrol,
            "diesel" => Self::Diesel,
            "hybrid" => Self::Hybrid,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "petrol",
            Self::Diesel => "diesel",
            Self::Hybrid => "hybrid",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tuning stage ("Steg 1", "Steg 2", "DSG") as offered for one engine.
///
/// Numeric fields are `Option` on purpose: the content store does not
/// enforce presence or sign, and a negative or missing figure means
/// "not available", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: DbId,
    pub name: String,
    pub orig_hk: Option<i32>,
    pub tuned_hk: Option<i32>,
    pub orig_nm: Option<i32>,
    pub tuned_nm: Option<i32>,
    /// Price in whole SEK.
    pub price: Option<i32>,
    /// Transmission-control figures (launch control, RPM limit, shift
    /// time). Only present for gearbox stages.
    pub gearbox: Option<GearboxSpec>,
    pub description: Option<String>,
}

/// Original/optimized value pairs for gearbox-software stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearboxSpec {
    pub launch_control: Option<ValuePair>,
    pub rpm_limit: Option<ValuePair>,
    pub shift_time_ms: Option<ValuePair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePair {
    pub original: Option<i32>,
    pub optimized: Option<i32>,
}

/// An AKT+ option (add-on) with its applicability predicate inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<i32>,
    /// Applies to every engine/stage regardless of the other fields.
    pub universal: bool,
    /// Fuel types this option applies to (empty = no fuel restriction
    /// expressed; see `addons::addon_applies` for precedence).
    pub fuels: Vec<Fuel>,
    /// If set, the option is only compatible with this stage name.
    pub stage_name: Option<String>,
    /// Explicit engine ids; when non-empty this list is authoritative.
    pub engine_ids: Vec<DbId>,
}

/// Treat negative source figures as "not available".
///
/// The content store does not validate sign; a stray `-1` placeholder
/// must never render as a real output figure or price.
pub fn non_negative(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_parse_known_values() {
        assert_eq!(Fuel::parse("Diesel"), Fuel::Diesel);
        assert_eq!(Fuel::parse("bensin"), Fuel::Petrol);
        assert_eq!(Fuel::parse("  petrol "), Fuel::Petrol);
        assert_eq!(Fuel::parse("Hybrid"), Fuel::Hybrid);
    }

    #[test]
    fn fuel_parse_unknown_maps_to_other() {
        assert_eq!(Fuel::parse("hydrogen"), Fuel::Other);
        assert_eq!(Fuel::parse(""), Fuel::Other);
    }

    #[test]
    fn non_negative_filters_placeholders() {
        assert_eq!(non_negative(Some(-1)), None);
        assert_eq!(non_negative(Some(0)), Some(0));
        assert_eq!(non_negative(Some(4995)), Some(4995));
        assert_eq!(non_negative(None), None);
    }
}
