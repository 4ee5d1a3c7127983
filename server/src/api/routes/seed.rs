//! Seed endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::types::ApiError;
use crate::data::DirectoryService;
use crate::domain::{SeedReport, seed_directory};

#[derive(Clone)]
pub struct SeedApiState {
    pub database: Arc<DirectoryService>,
    pub employees: usize,
}

/// Build Seed API routes
pub fn routes(database: Arc<DirectoryService>, employees: usize) -> Router<()> {
    Router::new()
        .route("/", post(seed))
        .with_state(SeedApiState {
            database,
            employees,
        })
}

/// Load synthetic employees and the starter preset. No-op once employees exist.
#[utoipa::path(
    post,
    path = "/api/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Seed result with current counts", body = SeedReport),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn seed(State(state): State<SeedApiState>) -> Result<Json<SeedReport>, ApiError> {
    let repo = state.database.repository();
    let report = seed_directory(repo.as_ref(), state.employees)
        .await
        .map_err(ApiError::from_data)?;
    Ok(Json(report))
}
