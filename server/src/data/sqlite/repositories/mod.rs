//! SQLite repositories
//!
//! Types (EmployeeRow, PresetRow, etc.) should be imported from `crate::data::types`.

pub mod employee;
pub mod preset;
pub mod seed;

pub use employee::{count_employees, insert_employees, list_employees};
pub use preset::{
    count_presets, create_preset, delete_preset, get_default_preset, insert_preset, list_presets,
    update_preset,
};
pub use seed::seed_directory;
