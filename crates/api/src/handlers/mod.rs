pub mod assets;
pub mod auth;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod import;
pub mod overrides;
pub mod preferences;
pub mod resellers;
pub mod storefront;
