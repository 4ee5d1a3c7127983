//! Employee API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::types::{default_limit, default_page, validate_limit, validate_page};
use crate::data::types::EmployeeRow;
use crate::utils::time::secs_to_datetime;

fn default_sort_field() -> String {
    "hireDate".to_string()
}

fn default_sort_order() -> String {
    "desc".to_string()
}

/// Query params for listing employees
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEmployeesQuery {
    #[serde(default = "default_page")]
    #[validate(custom(function = "validate_page"))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[validate(custom(function = "validate_limit"))]
    pub limit: u32,

    /// Field name to sort by; unknown names keep the natural order
    #[serde(default = "default_sort_field")]
    pub sort_field: String,

    /// `asc` or `desc`
    #[serde(default = "default_sort_order")]
    pub sort_order: String,

    /// JSON array of `{field, operator, value}`
    pub filters: Option<String>,

    /// `AND` (default) or `OR`
    pub logic: Option<String>,
}

/// Employee DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
    pub status: String,
    pub location: String,
    pub age: i64,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for EmployeeDto {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            department: row.department,
            position: row.position,
            salary: row.salary,
            hire_date: secs_to_datetime(row.hire_date),
            status: row.status,
            location: row.location,
            age: row.age,
            phone: row.phone,
            manager: row.manager,
            created_at: secs_to_datetime(row.created_at),
            updated_at: secs_to_datetime(row.updated_at),
        }
    }
}
