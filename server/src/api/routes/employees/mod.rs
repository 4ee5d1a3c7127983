//! Employee API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedQuery;
use crate::api::types::{ApiError, PageEnvelope};
use crate::data::DirectoryService;
use crate::data::filters::{EmployeeField, FilterLogic, compile, parse_filters};
use crate::data::types::{EmployeeListParams, EmployeeSort, OrderDirection};

use types::{EmployeeDto, ListEmployeesQuery};

/// Shared state for Employees API endpoints
#[derive(Clone)]
pub struct EmployeesApiState {
    pub database: Arc<DirectoryService>,
}

/// Build Employees API routes
pub fn routes(database: Arc<DirectoryService>) -> Router<()> {
    let state = EmployeesApiState { database };

    Router::new()
        .route("/", get(list_employees))
        .with_state(state)
}

/// Resolve the requested sort column. Unknown names keep the natural order.
fn resolve_sort(sort_field: &str, sort_order: &str) -> Option<EmployeeSort> {
    match EmployeeField::parse(sort_field) {
        Some(field) => Some(EmployeeSort {
            field,
            direction: OrderDirection::parse(sort_order),
        }),
        None => {
            tracing::debug!(sort_field, "Ignoring unknown sort field");
            None
        }
    }
}

/// Turn validated query params into repository params
fn build_list_params(query: &ListEmployeesQuery) -> Result<EmployeeListParams, ApiError> {
    let filters = match &query.filters {
        Some(raw) => parse_filters(raw)?,
        None => Vec::new(),
    };
    let logic = query
        .logic
        .as_deref()
        .map(FilterLogic::parse)
        .unwrap_or_default();
    let predicate = compile(&filters, logic)?;

    Ok(EmployeeListParams {
        predicate,
        sort: resolve_sort(&query.sort_field, &query.sort_order),
        page: query.page,
        limit: query.limit,
    })
}

/// List employees with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    params(
        ("page" = Option<u32>, Query, description = "Page number (default 1)"),
        ("limit" = Option<u32>, Query, description = "Items per page (1-500, default 50)"),
        ("sortField" = Option<String>, Query, description = "Field to sort by (default hireDate)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default desc)"),
        ("filters" = Option<String>, Query, description = "JSON array of {field, operator, value}"),
        ("logic" = Option<String>, Query, description = "AND (default) or OR")
    ),
    responses(
        (status = 200, description = "Page of employees with pagination metadata"),
        (status = 400, description = "Invalid filters or pagination"),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn list_employees(
    State(state): State<EmployeesApiState>,
    ValidatedQuery(query): ValidatedQuery<ListEmployeesQuery>,
) -> Result<Json<PageEnvelope<EmployeeDto>>, ApiError> {
    let params = build_list_params(&query)?;
    let repo = state.database.repository();

    let (rows, total) = repo
        .list_employees(&params)
        .await
        .map_err(ApiError::from_data)?;

    let data: Vec<EmployeeDto> = rows.into_iter().map(EmployeeDto::from).collect();

    Ok(Json(PageEnvelope::new(data, query.page, query.limit, total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::SqlValue;

    fn query(filters: Option<&str>, logic: Option<&str>, sort_field: &str) -> ListEmployeesQuery {
        ListEmployeesQuery {
            page: 2,
            limit: 10,
            sort_field: sort_field.to_string(),
            sort_order: "asc".to_string(),
            filters: filters.map(str::to_string),
            logic: logic.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_sort_known_field() {
        let sort = resolve_sort("salary", "asc").unwrap();
        assert_eq!(sort.field, EmployeeField::Salary);
        assert_eq!(sort.direction, OrderDirection::Asc);
    }

    #[test]
    fn test_resolve_sort_defaults_to_desc() {
        let sort = resolve_sort("hireDate", "sideways").unwrap();
        assert_eq!(sort.direction, OrderDirection::Desc);
    }

    #[test]
    fn test_resolve_sort_unknown_field_is_ignored() {
        assert!(resolve_sort("password", "asc").is_none());
    }

    #[test]
    fn test_build_params_without_filters_matches_all() {
        let params = build_list_params(&query(None, None, "hireDate")).unwrap();
        assert_eq!(params.predicate.sql, "1=1");
        assert!(params.predicate.params.is_empty());
        assert_eq!(params.page, 2);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_build_params_compiles_filters_with_or() {
        let filters = r#"[{"field":"department","operator":"equals","value":"Sales"},
                          {"field":"age","operator":"greaterThan","value":"40"}]"#;
        let params = build_list_params(&query(Some(filters), Some("OR"), "age")).unwrap();
        assert!(params.predicate.sql.contains(" OR "));
        assert_eq!(
            params.predicate.params,
            vec![SqlValue::Text("Sales".to_string()), SqlValue::Real(40.0)]
        );
    }

    #[test]
    fn test_build_params_rejects_unknown_field() {
        let filters = r#"[{"field":"ssn","operator":"equals","value":"1"}]"#;
        let err = build_list_params(&query(Some(filters), None, "hireDate")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { ref code, .. } if code == "INVALID_FILTER_FIELD"));
    }

    #[test]
    fn test_build_params_rejects_malformed_json() {
        let err = build_list_params(&query(Some("[{"), None, "hireDate")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { ref code, .. } if code == "INVALID_FILTER_JSON"));
    }
}
