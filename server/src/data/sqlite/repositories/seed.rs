//! Initial data load

use sqlx::SqlitePool;

use crate::data::sqlite::{SqliteError, begin_write};
use crate::data::types::{EmployeeRow, PresetInput};

use super::employee::insert_employees;
use super::preset::insert_preset;

/// Insert the employee population and the starter preset in one transaction.
///
/// Does nothing and returns false when any employee already exists. A
/// concurrent seed that races past the check fails on the unique
/// `employee_id` constraint instead of duplicating rows.
pub async fn seed_directory(
    pool: &SqlitePool,
    employees: &[EmployeeRow],
    preset: &PresetInput,
) -> Result<bool, SqliteError> {
    let mut tx = begin_write(pool).await?;

    let existing: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(&mut *tx)
        .await?;
    if existing.0 > 0 {
        tracing::debug!(existing = existing.0, "Employees present, skipping seed");
        return Ok(false);
    }

    let inserted = insert_employees(&mut *tx, employees).await?;
    insert_preset(&mut *tx, preset).await?;

    tx.commit().await?;

    tracing::debug!(employees = inserted, "Seeded directory");
    Ok(true)
}
