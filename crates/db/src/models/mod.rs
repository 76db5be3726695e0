pub mod addon;
pub mod brand;
pub mod contact;
pub mod engine;
pub mod preference;
pub mod reseller;
