pub mod addon_repo;
pub mod catalog_repo;
pub mod contact_repo;
pub mod import_repo;
pub mod override_repo;
pub mod preference_repo;
pub mod settings_repo;

pub use addon_repo::AddonRepo;
pub use catalog_repo::CatalogRepo;
pub use contact_repo::ContactRepo;
pub use import_repo::ImportRepo;
pub use override_repo::OverrideRepo;
pub use preference_repo::{PgPreferenceStore, PreferenceRepo};
pub use settings_repo::SettingsRepo;
