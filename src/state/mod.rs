// State management module
// Handles the activity catalog, participant rosters, and seed data

pub mod catalog;
pub mod seed;

pub use catalog::{Activity, ActivityName, Catalog, CatalogError};
pub use seed::SeedError;
