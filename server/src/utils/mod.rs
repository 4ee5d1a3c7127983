//! Utility functions for the application

pub mod file;
pub mod hash;
pub mod sql;
pub mod terminal;
pub mod time;
