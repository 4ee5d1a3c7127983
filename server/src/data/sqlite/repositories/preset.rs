//! Preset repository for SQLite operations
//!
//! At most one preset is the default. Writes that set `is_default` clear the
//! previous default in the same transaction, and the partial unique index
//! `idx_presets_single_default` rejects anything that slips past.

use sqlx::{SqliteConnection, SqlitePool};

use crate::data::filters::FilterLogic;
use crate::data::sqlite::{SqliteError, begin_write};
use crate::data::types::{PresetInput, PresetRow};

type PresetTuple = (String, String, String, String, bool, i64, i64);

const PRESET_COLUMNS: &str = "id, name, filters, logic, is_default, created_at, updated_at";

fn preset_from_row(row: PresetTuple) -> Result<PresetRow, SqliteError> {
    let (id, name, filters, logic, is_default, created_at, updated_at) = row;
    let filters = serde_json::from_str(&filters)
        .map_err(|e| SqliteError::InvalidData(format!("preset {} filters: {}", id, e)))?;
    Ok(PresetRow {
        id,
        name,
        filters,
        logic: FilterLogic::parse(&logic),
        is_default,
        created_at,
        updated_at,
    })
}

fn encode_filters(input: &PresetInput) -> Result<String, SqliteError> {
    serde_json::to_string(&input.filters)
        .map_err(|e| SqliteError::InvalidData(format!("preset filters: {}", e)))
}

async fn clear_default(
    conn: &mut SqliteConnection,
    except_id: &str,
    now: i64,
) -> Result<(), SqliteError> {
    sqlx::query("UPDATE presets SET is_default = 0, updated_at = ? WHERE is_default = 1 AND id != ?")
        .bind(now)
        .bind(except_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Insert a preset on an open connection, clearing any other default first.
/// Callers own the transaction.
pub async fn insert_preset(
    conn: &mut SqliteConnection,
    input: &PresetInput,
) -> Result<PresetRow, SqliteError> {
    let id = cuid2::create_id();
    let now = chrono::Utc::now().timestamp();
    let filters_json = encode_filters(input)?;

    if input.is_default {
        clear_default(conn, &id, now).await?;
    }

    sqlx::query(
        "INSERT INTO presets (id, name, filters, logic, is_default, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&input.name)
    .bind(&filters_json)
    .bind(input.logic.as_str())
    .bind(input.is_default)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(PresetRow {
        id,
        name: input.name.clone(),
        filters: input.filters.clone(),
        logic: input.logic,
        is_default: input.is_default,
        created_at: now,
        updated_at: now,
    })
}

/// Create a new preset with a generated CUID2 ID
pub async fn create_preset(
    pool: &SqlitePool,
    input: &PresetInput,
) -> Result<PresetRow, SqliteError> {
    let mut tx = begin_write(pool).await?;
    let preset = insert_preset(&mut *tx, input).await?;
    tx.commit().await?;
    Ok(preset)
}

/// Replace name, filters, logic and default flag of an existing preset.
/// Returns None if the preset does not exist.
pub async fn update_preset(
    pool: &SqlitePool,
    id: &str,
    input: &PresetInput,
) -> Result<Option<PresetRow>, SqliteError> {
    let now = chrono::Utc::now().timestamp();
    let filters_json = encode_filters(input)?;

    let mut tx = begin_write(pool).await?;

    let created_at: Option<i64> = sqlx::query_scalar("SELECT created_at FROM presets WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    let Some(created_at) = created_at else {
        return Ok(None);
    };

    if input.is_default {
        clear_default(&mut *tx, id, now).await?;
    }

    sqlx::query(
        "UPDATE presets SET name = ?, filters = ?, logic = ?, is_default = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&filters_json)
    .bind(input.logic.as_str())
    .bind(input.is_default)
    .bind(now)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(PresetRow {
        id: id.to_string(),
        name: input.name.clone(),
        filters: input.filters.clone(),
        logic: input.logic,
        is_default: input.is_default,
        created_at,
        updated_at: now,
    }))
}

/// Delete a preset (idempotent)
/// Returns true if removed, false if it didn't exist
pub async fn delete_preset(pool: &SqlitePool, id: &str) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM presets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Get the default preset, if any
pub async fn get_default_preset(pool: &SqlitePool) -> Result<Option<PresetRow>, SqliteError> {
    let sql = format!(
        "SELECT {} FROM presets WHERE is_default = 1 LIMIT 1",
        PRESET_COLUMNS
    );
    let row = sqlx::query_as::<_, PresetTuple>(&sql)
        .fetch_optional(pool)
        .await?;
    row.map(preset_from_row).transpose()
}

/// List all presets, oldest first
pub async fn list_presets(pool: &SqlitePool) -> Result<Vec<PresetRow>, SqliteError> {
    let sql = format!(
        "SELECT {} FROM presets ORDER BY created_at ASC, rowid ASC",
        PRESET_COLUMNS
    );
    let rows = sqlx::query_as::<_, PresetTuple>(&sql)
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(preset_from_row).collect()
}

pub async fn count_presets(pool: &SqlitePool) -> Result<u64, SqliteError> {
    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM presets")
        .fetch_one(pool)
        .await?;
    Ok(total.0 as u64)
}
