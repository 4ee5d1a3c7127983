//! Preset API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::filters::{Filter, FilterLogic};
use crate::data::types::{PresetInput, PresetRow};
use crate::utils::time::secs_to_datetime;

/// Preset DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub filters: Vec<Filter>,
    #[schema(value_type = String, example = "AND")]
    pub logic: FilterLogic,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PresetRow> for PresetDto {
    fn from(row: PresetRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            filters: row.filters,
            logic: row.logic,
            is_default: row.is_default,
            created_at: secs_to_datetime(row.created_at),
            updated_at: secs_to_datetime(row.updated_at),
        }
    }
}

/// Request body for creating or replacing a preset
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 50, message = "Maximum 50 filters allowed"))]
    pub filters: Vec<Filter>,

    /// `OR` matches any filter; anything else matches all
    #[serde(default)]
    #[schema(value_type = String, example = "AND")]
    pub logic: FilterLogic,

    #[serde(default)]
    pub is_default: bool,
}

impl From<PresetRequest> for PresetInput {
    fn from(req: PresetRequest) -> Self {
        Self {
            name: req.name,
            filters: req.filters,
            logic: req.logic,
            is_default: req.is_default,
        }
    }
}

/// Response for preset deletion
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::MAX_FILTERS;

    #[test]
    fn test_request_defaults() {
        let req: PresetRequest = serde_json::from_str(r#"{"name":"Remote"}"#).unwrap();
        assert!(req.filters.is_empty());
        assert_eq!(req.logic, FilterLogic::And);
        assert!(!req.is_default);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_camel_case() {
        let req: PresetRequest = serde_json::from_str(
            r#"{"name":"Sales","filters":[{"field":"department","operator":"equals","value":"Sales"}],"logic":"OR","isDefault":true}"#,
        )
        .unwrap();
        assert_eq!(req.filters.len(), 1);
        assert_eq!(req.logic, FilterLogic::Or);
        assert!(req.is_default);
    }

    #[test]
    fn test_request_validation() {
        let empty: PresetRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(empty.validate().is_err());

        let long = format!(r#"{{"name":"{}"}}"#, "x".repeat(101));
        let long: PresetRequest = serde_json::from_str(&long).unwrap();
        assert!(long.validate().is_err());

        let mut many: PresetRequest = serde_json::from_str(r#"{"name":"Many"}"#).unwrap();
        many.filters = vec![Filter::new("age", "equals", "30"); MAX_FILTERS + 1];
        assert!(many.validate().is_err());
    }

    #[test]
    fn test_dto_shape() {
        let dto = PresetDto::from(PresetRow {
            id: "p1".to_string(),
            name: "Sales".to_string(),
            filters: vec![],
            logic: FilterLogic::Or,
            is_default: true,
            created_at: 0,
            updated_at: 0,
        });
        let json = serde_json::to_value(dto).unwrap();
        assert_eq!(json["_id"], "p1");
        assert_eq!(json["logic"], "OR");
        assert_eq!(json["isDefault"], true);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
