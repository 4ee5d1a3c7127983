//! Employee rows and listing parameters

use serde::{Deserialize, Serialize};

use crate::data::filters::{EmployeeField, Predicate};

/// Employee row from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: String,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: i64,
    pub status: String,
    pub location: String,
    pub age: i64,
    pub phone: String,
    pub manager: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDirection {
    #[default]
    Desc,
    Asc,
}

impl OrderDirection {
    /// `asc` sorts ascending; any other value sorts descending
    pub fn parse(s: &str) -> Self {
        if s == "asc" { Self::Asc } else { Self::Desc }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Resolved sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeSort {
    pub field: EmployeeField,
    pub direction: OrderDirection,
}

impl EmployeeSort {
    /// ORDER BY clause with `id` as the stable tiebreaker.
    /// `None` keeps the natural (insertion id) order.
    pub fn order_by_sql(sort: Option<&Self>) -> String {
        match sort {
            Some(s) => format!(
                "{} {}, id {}",
                s.field.column(),
                s.direction.as_sql(),
                s.direction.as_sql()
            ),
            None => "id ASC".to_string(),
        }
    }
}

/// Parameters for list_employees query
#[derive(Debug, Clone)]
pub struct EmployeeListParams {
    pub predicate: Predicate,
    pub sort: Option<EmployeeSort>,
    pub page: u32,
    pub limit: u32,
}

impl EmployeeListParams {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}
