//! Domain logic for the employee directory
//!
//! - `seed` - Synthetic employee population and the starter preset

pub mod seed;

pub use seed::{SeedReport, seed_directory};
