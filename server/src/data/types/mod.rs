//! Shared data types for the directory store
//!
//! Row types returned by the repositories and the parameter structs they
//! accept. Timestamps are unix seconds.

mod employee;
mod preset;

pub use employee::{EmployeeListParams, EmployeeRow, EmployeeSort, OrderDirection};
pub use preset::{PresetInput, PresetRow};
