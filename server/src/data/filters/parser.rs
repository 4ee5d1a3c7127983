//! Filter parsing
//!
//! Parses the `filters` query parameter (a JSON array) into Filter structs.
//! Field and operator names are resolved later by the compiler.

use super::error::FilterError;
use super::types::Filter;

/// Maximum size of filter JSON in bytes (64KB)
pub const MAX_FILTER_JSON_SIZE: usize = 64 * 1024;

/// Maximum number of filters allowed
pub const MAX_FILTERS: usize = 50;

/// Parse filters from JSON query param
///
/// An empty or blank string means no filters.
pub fn parse_filters(json_str: &str) -> Result<Vec<Filter>, FilterError> {
    if json_str.len() > MAX_FILTER_JSON_SIZE {
        return Err(FilterError::TooLarge {
            max: MAX_FILTER_JSON_SIZE,
        });
    }
    if json_str.trim().is_empty() {
        return Ok(Vec::new());
    }

    let filters: Vec<Filter> =
        serde_json::from_str(json_str).map_err(|e| FilterError::InvalidJson(e.to_string()))?;

    if filters.len() > MAX_FILTERS {
        return Err(FilterError::TooMany { max: MAX_FILTERS });
    }

    Ok(filters)
}
