//! Pure domain logic for the tuning-catalog platform.
//!
//! No database access, no async I/O (except the [`prefs`] port, which is
//! a trait the storage crates implement). Everything here is testable in
//! isolation: catalog types, reseller override resolution, bulk-import
//! duplicate detection, the synthetic dyno curve, and the shared
//! name-normalization utilities.

pub mod addons;
pub mod catalog;
pub mod dyno;
pub mod error;
pub mod import;
pub mod normalize;
pub mod overrides;
pub mod prefs;
pub mod types;
