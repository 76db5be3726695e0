//! Bulk catalog import: vendor JSON parsing, flattening, and duplicate
//! detection. Pure logic only — applying the plan against the content
//! store happens in the API layer, one record at a time.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_name, normalize_year_range};

// ── Vendor file format ───────────────────────────────────────────────
//
// Externally authored JSON, shaped as nested name-keyed maps:
// { brand: { models: { model: { years: { range: { engines: { label:
// { type, stages: { name: { origHk, tunedHk, origNm, tunedNm, price
// } } } } } } } } } }. Missing nested levels default to empty maps.

#[derive(Debug, Clone, Deserialize)]
pub struct VendorCatalog(pub BTreeMap<String, VendorBrand>);

#[derive(Debug, Clone, Deserialize)]
pub struct VendorBrand {
    #[serde(default)]
    pub models: BTreeMap<String, VendorModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendorModel {
    #[serde(default)]
    pub years: BTreeMap<String, VendorYear>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendorYear {
    #[serde(default)]
    pub engines: BTreeMap<String, VendorEngine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendorEngine {
    /// Fuel type string ("petrol", "diesel", ...).
    #[serde(rename = "type", default)]
    pub fuel: Option<String>,
    #[serde(default)]
    pub stages: BTreeMap<String, VendorStage>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VendorStage {
    #[serde(rename = "origHk")]
    pub orig_hk: Option<i32>,
    #[serde(rename = "tunedHk")]
    pub tuned_hk: Option<i32>,
    #[serde(rename = "origNm")]
    pub orig_nm: Option<i32>,
    #[serde(rename = "tunedNm")]
    pub tuned_nm: Option<i32>,
    pub price: Option<i32>,
}

// ── Flattened records ────────────────────────────────────────────────

/// One importable (brand, model, year, engine) combination from the
/// vendor file, with the stage that seeds the new engine.
#[derive(Debug, Clone, Serialize)]
pub struct ImportRecord {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub engine: String,
    pub fuel: Option<String>,
    pub seed_stage: Option<VendorStage>,
}

/// Normalized identity of a record, used for duplicate detection on
/// both sides of the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub engine: String,
}

impl RecordKey {
    pub fn new(brand: &str, model: &str, year: &str, engine: &str) -> Self {
        Self {
            brand: normalize_name(brand),
            model: normalize_name(model),
            year: normalize_year_range(year),
            engine: normalize_name(engine),
        }
    }
}

impl ImportRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.brand, &self.model, &self.year, &self.engine)
    }
}

/// Flatten a vendor catalog into per-engine import records.
///
/// The seed stage is the entry keyed "Stage 1" (case-insensitive) when
/// present, otherwise the first entry in key order; engines with no
/// stages at all still produce a record (with no seed).
pub fn flatten(catalog: &VendorCatalog) -> Vec<ImportRecord> {
    let mut records = Vec::new();
    for (brand, vb) in &catalog.0 {
        for (model, vm) in &vb.models {
            for (year, vy) in &vm.years {
                for (engine, ve) in &vy.engines {
                    records.push(ImportRecord {
                        brand: brand.clone(),
                        model: model.clone(),
                        year: year.clone(),
                        engine: engine.clone(),
                        fuel: ve.fuel.clone(),
                        seed_stage: pick_seed_stage(&ve.stages),
                    });
                }
            }
        }
    }
    records
}

fn pick_seed_stage(stages: &BTreeMap<String, VendorStage>) -> Option<VendorStage> {
    if let Some((_, stage)) = stages
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("stage 1"))
    {
        return Some(*stage);
    }
    stages.values().next().copied()
}

// ── Duplicate detection plan ─────────────────────────────────────────

/// Planned disposition of one record before any store writes happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// No existing engine matches; the record should be created.
    Create,
    /// A matching engine already exists; the record is skipped.
    Exists,
}

/// Final per-record outcome, reported back to the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "detail")]
pub enum ImportStatus {
    Created,
    Exists,
    Error(String),
}

/// Classify each record against the set of existing engine keys.
///
/// Records whose normalized (brand, model, year, engine) identity
/// matches an existing engine — or an earlier record in the same batch
/// — are marked [`Disposition::Exists`].
pub fn plan(
    records: &[ImportRecord],
    existing: &HashSet<RecordKey>,
) -> Vec<(ImportRecord, Disposition)> {
    let mut seen: HashSet<RecordKey> = existing.clone();
    records
        .iter()
        .map(|record| {
            let key = record.key();
            let disposition = if seen.insert(key) {
                Disposition::Create
            } else {
                Disposition::Exists
            };
            (record.clone(), disposition)
        })
        .collect()
}

/// Aggregate counts for an import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportCounts {
    pub created: usize,
    pub exists: usize,
    pub errors: usize,
}

impl ImportCounts {
    pub fn tally(statuses: &[ImportStatus]) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            match status {
                ImportStatus::Created => counts.created += 1,
                ImportStatus::Exists => counts.exists += 1,
                ImportStatus::Error(_) => counts.errors += 1,
            }
        }
        counts
    }
}
