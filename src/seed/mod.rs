//! The two fixed demonstration datasets and the procedures that insert them.

pub mod orders;
pub mod users;

pub use orders::{OrderSeedOutcome, seed_orders};
pub use users::{SeedReport, UserSeed, demo_users, seed_users};
