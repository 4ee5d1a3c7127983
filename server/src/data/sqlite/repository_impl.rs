//! DirectoryRepository trait implementation for SQLite

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::traits::DirectoryRepository;
use crate::data::types::{EmployeeListParams, EmployeeRow, PresetInput, PresetRow};

use super::SqliteService;
use super::repositories::{employee, preset, seed};

#[async_trait]
impl DirectoryRepository for Arc<SqliteService> {
    // ==================== Employee Operations ====================

    async fn list_employees(
        &self,
        params: &EmployeeListParams,
    ) -> Result<(Vec<EmployeeRow>, u64), DataError> {
        employee::list_employees(self.pool(), params)
            .await
            .map_err(Into::into)
    }

    async fn count_employees(&self) -> Result<u64, DataError> {
        employee::count_employees(self.pool())
            .await
            .map_err(Into::into)
    }

    // ==================== Preset Operations ====================

    async fn get_default_preset(&self) -> Result<Option<PresetRow>, DataError> {
        preset::get_default_preset(self.pool())
            .await
            .map_err(Into::into)
    }

    async fn list_presets(&self) -> Result<Vec<PresetRow>, DataError> {
        preset::list_presets(self.pool()).await.map_err(Into::into)
    }

    async fn create_preset(&self, input: &PresetInput) -> Result<PresetRow, DataError> {
        preset::create_preset(self.pool(), input)
            .await
            .map_err(Into::into)
    }

    async fn update_preset(
        &self,
        id: &str,
        input: &PresetInput,
    ) -> Result<Option<PresetRow>, DataError> {
        preset::update_preset(self.pool(), id, input)
            .await
            .map_err(Into::into)
    }

    async fn delete_preset(&self, id: &str) -> Result<bool, DataError> {
        preset::delete_preset(self.pool(), id)
            .await
            .map_err(Into::into)
    }

    async fn count_presets(&self) -> Result<u64, DataError> {
        preset::count_presets(self.pool()).await.map_err(Into::into)
    }

    // ==================== Seeding ====================

    async fn seed_directory(
        &self,
        employees: &[EmployeeRow],
        preset: &PresetInput,
    ) -> Result<bool, DataError> {
        seed::seed_directory(self.pool(), employees, preset)
            .await
            .map_err(Into::into)
    }
}
