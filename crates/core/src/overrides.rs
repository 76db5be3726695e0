//! Reseller override resolution.
//!
//! A reseller white-labels the catalog by storing override documents
//! scoped at four levels of specificity. Resolution picks exactly one
//! winning document (or none) per stage and applies a field-level
//! coalesce — overrides never merge numerically with each other.

use serde::{Deserialize, Serialize};

use crate::catalog::{non_negative, Stage};
use crate::error::CoreError;
use crate::types::DbId;

/// A reseller override document as stored in the content store.
///
/// Scoping fields beyond `reseller_id` and `stage_name` are optional;
/// which ones are present determines the document's specificity tier
/// (see [`resolve_stage`]). Value fields are optional too: an absent
/// field falls back to the base stage's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResellerOverride {
    pub id: DbId,
    pub reseller_id: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub engine: Option<String>,
    pub stage_name: String,
    pub price: Option<i32>,
    pub tuned_hk: Option<i32>,
    pub tuned_nm: Option<i32>,
    pub description: Option<String>,
}

/// The catalog position of the stage being resolved. Comparisons use the
/// stored display names, not slugs.
#[derive(Debug, Clone, Copy)]
pub struct StageScope<'a> {
    pub brand: &'a str,
    pub model: &'a str,
    pub year: &'a str,
    pub engine: &'a str,
}

/// Specificity tiers, most specific first. The first tier with a match
/// wins; later tiers are never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    /// brand + model + year + engine + stage name.
    FullyQualified,
    /// brand + model + stage name, year/engine absent.
    ModelWide,
    /// brand + year + stage name, model/engine absent.
    YearWide,
    /// brand + stage name only, the reseller's brand-wide default. A
    /// model- or year-scoped document for the same stage always shadows
    /// it rather than conflicting with it.
    BrandWide,
}

const TIERS: &[Tier] = &[
    Tier::FullyQualified,
    Tier::ModelWide,
    Tier::YearWide,
    Tier::BrandWide,
];

fn matches_tier(ov: &ResellerOverride, scope: &StageScope<'_>, tier: Tier) -> bool {
    if ov.brand.as_deref() != Some(scope.brand) {
        return false;
    }
    match tier {
        Tier::FullyQualified => {
            ov.model.as_deref() == Some(scope.model)
                && ov.year.as_deref() == Some(scope.year)
                && ov.engine.as_deref() == Some(scope.engine)
        }
        Tier::ModelWide => {
            ov.year.is_none()
                && ov.engine.is_none()
                && ov.model.as_deref() == Some(scope.model)
        }
        Tier::YearWide => {
            ov.model.is_none()
                && ov.engine.is_none()
                && ov.year.as_deref() == Some(scope.year)
        }
        Tier::BrandWide => ov.model.is_none() && ov.year.is_none() && ov.engine.is_none(),
    }
}

/// Compute the effective stage a reseller's storefront shows for `stage`
/// at `scope`, given every override document stored for that reseller.
///
/// Pure and total for well-formed inputs: no match returns the base
/// stage unchanged, a single match applies a field-level coalesce of
/// `price` / `tuned_hk` / `tuned_nm` / `description`. Two overrides in
/// the same winning tier is ambiguous — the store enforces scope
/// uniqueness at write time, so hitting it here means corrupt data and
/// is reported as a conflict rather than silently picking one.
pub fn resolve_stage(
    stage: &Stage,
    scope: &StageScope<'_>,
    overrides: &[ResellerOverride],
) -> Result<Stage, CoreError> {
    for tier in TIERS {
        let mut matched = overrides
            .iter()
            .filter(|ov| ov.stage_name == stage.name && matches_tier(ov, scope, *tier));

        let Some(winner) = matched.next() else {
            continue;
        };
        if let Some(second) = matched.next() {
            return Err(CoreError::Conflict(format!(
                "Ambiguous overrides for reseller '{}' on stage '{}' (documents {} and {})",
                winner.reseller_id, stage.name, winner.id, second.id
            )));
        }
        return Ok(apply(stage, winner));
    }
    Ok(stage.clone())
}

/// Field-level coalesce: override values win where defined, base stage
/// values fill the gaps. Negative override figures count as undefined.
fn apply(stage: &Stage, ov: &ResellerOverride) -> Stage {
    let mut effective = stage.clone();
    if let Some(price) = non_negative(ov.price) {
        effective.price = Some(price);
    }
    if let Some(hk) = non_negative(ov.tuned_hk) {
        effective.tuned_hk = Some(hk);
    }
    if let Some(nm) = non_negative(ov.tuned_nm) {
        effective.tuned_nm = Some(nm);
    }
    if let Some(ref desc) = ov.description {
        effective.description = Some(desc.clone());
    }
    effective
}
