//! OpenAPI specification

use axum::http::header;
use axum::response::{IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{employees, health, presets, seed};
use crate::data::filters::Filter;
use crate::domain::SeedReport;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "StaffDir API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Employee directory with filter presets"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "employees", description = "Filtered, sorted and paginated employee listing"),
        (name = "presets", description = "Saved filter presets"),
        (name = "seed", description = "Synthetic data loading")
    ),
    paths(
        health::health,
        employees::list_employees,
        presets::list_presets,
        presets::get_default_preset,
        presets::create_preset,
        presets::update_preset,
        presets::delete_preset,
        seed::seed,
    ),
    components(schemas(
        health::HealthResponse,
        Filter,
        employees::types::EmployeeDto,
        employees::types::ListEmployeesQuery,
        presets::types::PresetDto,
        presets::types::PresetRequest,
        presets::types::MessageResponse,
        SeedReport,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}
