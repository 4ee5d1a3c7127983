//! Preset rows

use serde::{Deserialize, Serialize};

use crate::data::filters::{Filter, FilterLogic};

/// Preset row from database, with the filters JSON already decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRow {
    pub id: String,
    pub name: String,
    pub filters: Vec<Filter>,
    pub logic: FilterLogic,
    pub is_default: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields written on create and on full-replace update
#[derive(Debug, Clone, PartialEq)]
pub struct PresetInput {
    pub name: String,
    pub filters: Vec<Filter>,
    pub logic: FilterLogic,
    pub is_default: bool,
}
