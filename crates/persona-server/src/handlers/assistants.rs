//! Assistant CRUD and role filtering handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use persona_core::AssistantId;
use persona_storage::UpdateMode;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::schema::assistants::{
    AssistantListResponse, AssistantResponse, CreateAssistantRequest, UpdateAssistantRequest,
    CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE,
};
use crate::state::AppState;

/// Lists all assistants.
///
/// `GET /api/assistants`
pub async fn list_assistants(State(state): State<AppState>) -> Json<AssistantListResponse> {
    let service = state.service.lock().await;
    Json(AssistantListResponse::listing(service.list()))
}

/// Returns one assistant.
///
/// `GET /api/assistants/{id}`
pub async fn get_assistant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssistantResponse>, ApiError> {
    let id = parse_id(&id)?;
    let service = state.service.lock().await;
    let record = service.get(id)?;
    Ok(Json(AssistantResponse::ok(record)))
}

/// Creates an assistant.
///
/// `POST /api/assistants`
pub async fn create_assistant(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<CreateAssistantRequest>,
) -> Result<(StatusCode, Json<AssistantResponse>), ApiError> {
    let mut service = state.service.lock().await;
    let record = service.create(draft)?;
    Ok((
        StatusCode::CREATED,
        Json(AssistantResponse::ok(record).with_message(CREATED_MESSAGE)),
    ))
}

/// Full update. Merges exactly like [`merge_assistant`]; omitted fields keep
/// their stored values.
///
/// `PUT /api/assistants/{id}`
pub async fn replace_assistant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateAssistantRequest>,
) -> Result<Json<AssistantResponse>, ApiError> {
    update(state, &id, patch, UpdateMode::Replace).await
}

/// Partial update.
///
/// `PATCH /api/assistants/{id}`
pub async fn merge_assistant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateAssistantRequest>,
) -> Result<Json<AssistantResponse>, ApiError> {
    update(state, &id, patch, UpdateMode::Merge).await
}

/// Deletes an assistant and returns the removed record.
///
/// `DELETE /api/assistants/{id}`
pub async fn delete_assistant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssistantResponse>, ApiError> {
    let id = parse_id(&id)?;
    let mut service = state.service.lock().await;
    let removed = service.delete(id)?;
    Ok(Json(AssistantResponse::ok(removed).with_message(DELETED_MESSAGE)))
}

/// Lists assistants whose role matches, ignoring case. Always 200.
///
/// `GET /api/assistants/role/{role}`
pub async fn assistants_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<AssistantListResponse> {
    let service = state.service.lock().await;
    Json(AssistantListResponse::listing(service.find_by_role(&role)))
}

async fn update(
    state: AppState,
    raw_id: &str,
    patch: UpdateAssistantRequest,
    mode: UpdateMode,
) -> Result<Json<AssistantResponse>, ApiError> {
    let id = parse_id(raw_id)?;
    let mut service = state.service.lock().await;
    let record = service.update(id, patch, mode)?;
    Ok(Json(AssistantResponse::ok(record).with_message(UPDATED_MESSAGE)))
}

/// Reads the leading integer of the path segment (`1abc` names id 1). A
/// segment with no leading digits cannot name any record, so it is reported
/// the same way as an unknown id.
fn parse_id(raw: &str) -> Result<AssistantId, ApiError> {
    AssistantId::parse_leading(raw).ok_or_else(|| ApiError::assistant_not_found(raw))
}
