//! AKT+ option applicability.
//!
//! Applicability is a pure predicate over (engine, fuel, stage name);
//! there is no persisted "assigned" state, it is recomputed on every
//! read.

use crate::catalog::{AddOn, Fuel};
use crate::types::DbId;

/// Decide whether an AKT+ option applies to the given engine and stage.
///
/// Precedence:
/// 1. `universal` options apply everywhere.
/// 2. A non-empty explicit engine list is authoritative: the engine must
///    be listed (the optional stage-name restriction still applies).
/// 3. Otherwise the option's fuel list must contain the engine's fuel,
///    and the optional stage-name restriction must match.
pub fn addon_applies(addon: &AddOn, engine_id: DbId, fuel: Fuel, stage_name: &str) -> bool {
    if addon.universal {
        return true;
    }

    let stage_ok = addon
        .stage_name
        .as_deref()
        .is_none_or(|restricted| restricted == stage_name);
    if !stage_ok {
        return false;
    }

    if !addon.engine_ids.is_empty() {
        return addon.engine_ids.contains(&engine_id);
    }

    addon.fuels.contains(&fuel)
}

/// Filter a list of options down to those applicable to one stage.
pub fn applicable_addons<'a>(
    addons: &'a [AddOn],
    engine_id: DbId,
    fuel: Fuel,
    stage_name: &str,
) -> Vec<&'a AddOn> {
    addons
        .iter()
        .filter(|addon| addon_applies(addon, engine_id, fuel, stage_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addon() -> AddOn {
        AddOn {
            id: 1,
            title: "Launch control".into(),
            description: None,
            price: Some(1500),
            universal: false,
            fuels: vec![],
            stage_name: None,
            engine_ids: vec![],
        }
    }

    #[test]
    fn universal_applies_everywhere() {
        let mut a = addon();
        a.universal = true;
        assert!(addon_applies(&a, 42, Fuel::Diesel, "Steg 1"));
        assert!(addon_applies(&a, 7, Fuel::Petrol, "DSG"));
    }

    #[test]
    fn explicit_engine_list_is_authoritative() {
        let mut a = addon();
        a.engine_ids = vec![42];
        // Listed engine applies even with an empty fuel list.
        assert!(addon_applies(&a, 42, Fuel::Petrol, "Steg 1"));
        assert!(!addon_applies(&a, 43, Fuel::Petrol, "Steg 1"));
    }

    #[test]
    fn fuel_list_gates_non_explicit_addons() {
        let mut a = addon();
        a.fuels = vec![Fuel::Petrol];
        assert!(addon_applies(&a, 42, Fuel::Petrol, "Steg 1"));
        assert!(!addon_applies(&a, 42, Fuel::Diesel, "Steg 1"));
    }

    #[test]
    fn stage_restriction_applies_on_top_of_both_paths() {
        let mut by_fuel = addon();
        by_fuel.fuels = vec![Fuel::Petrol];
        by_fuel.stage_name = Some("DSG".into());
        assert!(addon_applies(&by_fuel, 42, Fuel::Petrol, "DSG"));
        assert!(!addon_applies(&by_fuel, 42, Fuel::Petrol, "Steg 1"));

        let mut by_engine = addon();
        by_engine.engine_ids = vec![42];
        by_engine.stage_name = Some("DSG".into());
        assert!(addon_applies(&by_engine, 42, Fuel::Petrol, "DSG"));
        assert!(!addon_applies(&by_engine, 42, Fuel::Petrol, "Steg 1"));
    }

    #[test]
    fn unconstrained_non_universal_addon_applies_nowhere() {
        let a = addon();
        assert!(!addon_applies(&a, 42, Fuel::Petrol, "Steg 1"));
    }

    #[test]
    fn applicable_addons_filters() {
        let mut universal = addon();
        universal.id = 1;
        universal.universal = true;
        let mut diesel_only = addon();
        diesel_only.id = 2;
        diesel_only.fuels = vec![Fuel::Diesel];

        let addons = vec![universal, diesel_only];
        let applicable = applicable_addons(&addons, 42, Fuel::Petrol, "Steg 1");
        assert_eq!(applicable.len(), 1);
        assert_eq!(applicable[0].id, 1);
    }
}
