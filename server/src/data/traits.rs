//! Repository trait for the directory store
//!
//! Handlers and the seeder talk to storage through `DirectoryRepository`;
//! the SQLite service implements it.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::types::{EmployeeListParams, EmployeeRow, PresetInput, PresetRow};

#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    // ==================== Employee Operations ====================

    /// List one page of employees plus the total match count
    async fn list_employees(
        &self,
        params: &EmployeeListParams,
    ) -> Result<(Vec<EmployeeRow>, u64), DataError>;

    async fn count_employees(&self) -> Result<u64, DataError>;

    // ==================== Preset Operations ====================

    async fn get_default_preset(&self) -> Result<Option<PresetRow>, DataError>;

    /// All presets, oldest first
    async fn list_presets(&self) -> Result<Vec<PresetRow>, DataError>;

    /// Create a preset; a default preset replaces the previous default
    async fn create_preset(&self, input: &PresetInput) -> Result<PresetRow, DataError>;

    /// Full replace; None if the id does not exist
    async fn update_preset(
        &self,
        id: &str,
        input: &PresetInput,
    ) -> Result<Option<PresetRow>, DataError>;

    /// Idempotent delete; true if a row was removed
    async fn delete_preset(&self, id: &str) -> Result<bool, DataError>;

    async fn count_presets(&self) -> Result<u64, DataError>;

    // ==================== Seeding ====================

    /// Load the initial data set atomically. False if employees already exist.
    async fn seed_directory(
        &self,
        employees: &[EmployeeRow],
        preset: &PresetInput,
    ) -> Result<bool, DataError>;
}
