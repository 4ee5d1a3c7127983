//! Shared API types
//!
//! Common types used across all API endpoints including error handling
//! and pagination.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use validator::ValidationError;

use crate::data::filters::FilterError;

/// Maximum items per page for paginated endpoints
pub const MAX_PAGE_LIMIT: u32 = 500;
/// Maximum page number to prevent expensive OFFSET queries
pub const MAX_PAGE: u32 = 100_000;
/// Default page number
pub const DEFAULT_PAGE: u32 = 1;
/// Default items per page
pub const DEFAULT_LIMIT: u32 = 50;

/// Validator function for page parameter
pub fn validate_page(page: u32) -> Result<(), ValidationError> {
    if page < 1 {
        return Err(ValidationError::new("page_min").with_message("Page must be >= 1".into()));
    }
    if page > MAX_PAGE {
        return Err(ValidationError::new("page_max").with_message(
            format!("Page must be <= {} to prevent expensive queries", MAX_PAGE).into(),
        ));
    }
    Ok(())
}

/// Validator function for limit parameter
pub fn validate_limit(limit: u32) -> Result<(), ValidationError> {
    if limit == 0 || limit > MAX_PAGE_LIMIT {
        return Err(ValidationError::new("limit_range")
            .with_message(format!("Limit must be between 1 and {}", MAX_PAGE_LIMIT).into()));
    }
    Ok(())
}

pub fn default_page() -> u32 {
    DEFAULT_PAGE
}

pub fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Standard API error response
///
/// Serialized as `{"error": <message>, "code": <CODE>}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn from_data(e: crate::data::DataError) -> Self {
        tracing::error!(error = %e, "Data error");
        Self::internal("Database operation failed")
    }
}

impl From<FilterError> for ApiError {
    fn from(e: FilterError) -> Self {
        Self::bad_request(e.code(), e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": code,
            })),
        )
            .into_response()
    }
}

/// Paginated list envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u64,
    pub has_more: bool,
}

impl<T> PageEnvelope<T> {
    pub fn new(data: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        let limit = u64::from(limit.max(1));
        Self {
            data,
            total,
            page,
            total_pages: total.div_ceil(limit),
            has_more: u64::from(page) * limit < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(MAX_PAGE).is_ok());
        assert!(validate_page(0).is_err());
        assert!(validate_page(MAX_PAGE + 1).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(MAX_PAGE_LIMIT).is_ok());
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(MAX_PAGE_LIMIT + 1).is_err());
    }

    #[test]
    fn test_page_envelope_middle_page() {
        let page = PageEnvelope::new(vec![0; 10], 2, 10, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_more);
    }

    #[test]
    fn test_page_envelope_last_page() {
        let page = PageEnvelope::new(vec![0; 5], 3, 10, 25);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_envelope_empty() {
        let page = PageEnvelope::<u8>::new(vec![], 1, 50, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_envelope_serializes_camel_case() {
        let json = serde_json::to_value(PageEnvelope::new(vec![1], 1, 1, 2)).unwrap();
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["hasMore"], true);
    }

    #[tokio::test]
    async fn test_filter_error_is_bad_request() {
        let err: ApiError = FilterError::UnknownField("ssn".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "INVALID_FILTER_FIELD");
        assert_eq!(json["error"], "Cannot filter by unknown field: ssn");
    }

    #[tokio::test]
    async fn test_internal_error_body() {
        let response = ApiError::internal("Database operation failed").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Database operation failed");
        assert_eq!(json["code"], "INTERNAL");
    }
}
