//! API route handlers

pub mod employees;
pub mod health;
pub mod presets;
pub mod seed;
