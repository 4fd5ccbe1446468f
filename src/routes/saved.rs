//! Saved-components routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::services::saved::{self, SavedError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SavedIdsResponse {
    pub saved_component_ids: Vec<Uuid>,
}

pub(crate) fn saved_error_to_status(err: &SavedError) -> StatusCode {
    match err {
        SavedError::ComponentNotFound(_) => StatusCode::NOT_FOUND,
        SavedError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/organizations/{organization}/saved` — the organization's saved
/// component ids. Degrades to an empty set if the backend read fails.
pub async fn list_saved(
    State(state): State<AppState>,
    Path(organization): Path<String>,
) -> Json<SavedIdsResponse> {
    let ids = saved::fetch_saved_component_ids(&state.pool, &organization).await;
    let mut saved_component_ids: Vec<Uuid> = ids.into_iter().collect();
    saved_component_ids.sort_unstable();
    Json(SavedIdsResponse { saved_component_ids })
}

/// `PUT /api/organizations/{organization}/saved/{component_id}` — save.
pub async fn save(
    State(state): State<AppState>,
    Path((organization, component_id)): Path<(String, Uuid)>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    saved::save_component(&state.pool, &organization, component_id)
        .await
        .map_err(|e| saved_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/organizations/{organization}/saved/{component_id}` — unsave.
pub async fn unsave(
    State(state): State<AppState>,
    Path((organization, component_id)): Path<(String, Uuid)>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    saved::unsave_component(&state.pool, &organization, component_id)
        .await
        .map_err(|e| saved_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "saved_routes_test.rs"]
mod tests;
