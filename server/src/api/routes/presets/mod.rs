//! Filter preset API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::api::extractors::{PresetPath, ValidatedJson};
use crate::api::types::ApiError;
use crate::data::DirectoryService;

use types::{MessageResponse, PresetDto, PresetRequest};

/// Shared state for Presets API endpoints
#[derive(Clone)]
pub struct PresetsApiState {
    pub database: Arc<DirectoryService>,
}

/// Build Presets API routes
pub fn routes(database: Arc<DirectoryService>) -> Router<()> {
    let state = PresetsApiState { database };

    Router::new()
        .route("/", get(list_presets).post(create_preset))
        .route("/default", get(get_default_preset))
        .route("/{id}", put(update_preset).delete(delete_preset))
        .with_state(state)
}

/// List all presets, oldest first
#[utoipa::path(
    get,
    path = "/api/presets",
    tag = "presets",
    responses(
        (status = 200, description = "All presets", body = Vec<PresetDto>),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn list_presets(
    State(state): State<PresetsApiState>,
) -> Result<Json<Vec<PresetDto>>, ApiError> {
    let presets = state
        .database
        .repository()
        .list_presets()
        .await
        .map_err(ApiError::from_data)?;

    Ok(Json(presets.into_iter().map(PresetDto::from).collect()))
}

/// Get the default preset (`null` when none is marked default)
#[utoipa::path(
    get,
    path = "/api/presets/default",
    tag = "presets",
    responses(
        (status = 200, description = "Default preset or null", body = Option<PresetDto>),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn get_default_preset(
    State(state): State<PresetsApiState>,
) -> Result<Json<Option<PresetDto>>, ApiError> {
    let preset = state
        .database
        .repository()
        .get_default_preset()
        .await
        .map_err(ApiError::from_data)?;

    Ok(Json(preset.map(PresetDto::from)))
}

/// Create a preset. A default preset replaces the previous default.
#[utoipa::path(
    post,
    path = "/api/presets",
    tag = "presets",
    request_body = PresetRequest,
    responses(
        (status = 201, description = "Preset created", body = PresetDto),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn create_preset(
    State(state): State<PresetsApiState>,
    ValidatedJson(body): ValidatedJson<PresetRequest>,
) -> Result<(StatusCode, Json<PresetDto>), ApiError> {
    let preset = state
        .database
        .repository()
        .create_preset(&body.into())
        .await
        .map_err(ApiError::from_data)?;

    tracing::debug!(id = %preset.id, name = %preset.name, is_default = preset.is_default, "Preset created");

    Ok((StatusCode::CREATED, Json(PresetDto::from(preset))))
}

/// Replace a preset (`null` when the id does not exist)
#[utoipa::path(
    put,
    path = "/api/presets/{id}",
    tag = "presets",
    params(("id" = String, Path, description = "Preset ID")),
    request_body = PresetRequest,
    responses(
        (status = 200, description = "Updated preset or null", body = Option<PresetDto>),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn update_preset(
    State(state): State<PresetsApiState>,
    path: PresetPath,
    ValidatedJson(body): ValidatedJson<PresetRequest>,
) -> Result<Json<Option<PresetDto>>, ApiError> {
    let preset = state
        .database
        .repository()
        .update_preset(&path.id, &body.into())
        .await
        .map_err(ApiError::from_data)?;

    if preset.is_none() {
        tracing::debug!(id = %path.id, "Preset not found for update");
    }

    Ok(Json(preset.map(PresetDto::from)))
}

/// Delete a preset. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/api/presets/{id}",
    tag = "presets",
    params(("id" = String, Path, description = "Preset ID")),
    responses(
        (status = 200, description = "Preset deleted", body = MessageResponse),
        (status = 500, description = "Database operation failed")
    )
)]
pub async fn delete_preset(
    State(state): State<PresetsApiState>,
    path: PresetPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state
        .database
        .repository()
        .delete_preset(&path.id)
        .await
        .map_err(ApiError::from_data)?;

    tracing::debug!(id = %path.id, removed, "Preset delete");

    Ok(Json(MessageResponse {
        message: "Preset deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::{Filter, FilterLogic};
    use crate::data::sqlite::test_pool;

    async fn state() -> PresetsApiState {
        PresetsApiState {
            database: Arc::new(DirectoryService::from_pool(test_pool().await)),
        }
    }

    fn request(name: &str, is_default: bool) -> PresetRequest {
        PresetRequest {
            name: name.to_string(),
            filters: vec![Filter::new("department", "equals", "Sales")],
            logic: FilterLogic::And,
            is_default,
        }
    }

    #[tokio::test]
    async fn test_create_returns_201() {
        let state = state().await;
        let (status, Json(dto)) =
            create_preset(State(state), ValidatedJson(request("Sales", false)))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(dto.name, "Sales");
        assert_eq!(dto.filters.len(), 1);
        assert!(!dto.is_default);
    }

    #[tokio::test]
    async fn test_second_default_replaces_first() {
        let state = state().await;
        create_preset(State(state.clone()), ValidatedJson(request("First", true)))
            .await
            .unwrap();
        let (_, Json(second)) =
            create_preset(State(state.clone()), ValidatedJson(request("Second", true)))
                .await
                .unwrap();

        let Json(default) = get_default_preset(State(state.clone())).await.unwrap();
        assert_eq!(default.unwrap().id, second.id);

        let Json(all) = list_presets(State(state)).await.unwrap();
        assert_eq!(all.iter().filter(|p| p.is_default).count(), 1);
        assert_eq!(all[0].name, "First");
    }

    #[tokio::test]
    async fn test_default_is_null_when_none() {
        let Json(default) = get_default_preset(State(state().await)).await.unwrap();
        assert!(default.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let Json(updated) = update_preset(
            State(state().await),
            PresetPath {
                id: "missing".to_string(),
            },
            ValidatedJson(request("Nope", false)),
        )
        .await
        .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let state = state().await;
        let (_, Json(created)) =
            create_preset(State(state.clone()), ValidatedJson(request("Old", false)))
                .await
                .unwrap();

        let mut replacement = request("New", true);
        replacement.filters.clear();
        replacement.logic = FilterLogic::Or;
        let Json(updated) = update_preset(
            State(state),
            PresetPath {
                id: created.id.clone(),
            },
            ValidatedJson(replacement),
        )
        .await
        .unwrap();

        let updated = updated.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");
        assert!(updated.filters.is_empty());
        assert_eq!(updated.logic, FilterLogic::Or);
        assert!(updated.is_default);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let Json(res) = delete_preset(
            State(state().await),
            PresetPath {
                id: "never-existed".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(res.message, "Preset deleted");
    }
}
