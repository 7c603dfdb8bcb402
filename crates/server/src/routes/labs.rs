use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::lab;
use service::labs::domain::LabInput;
use tracing::info;

use crate::{errors::JsonApiError, extract::ValidatedJson, state::ServerState};

#[utoipa::path(
    get, path = "/labs", tag = "labs",
    responses(
        (status = 200, description = "All labs", body = [crate::openapi::LabDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<lab::Model>>, JsonApiError> {
    let labs = state.labs.get_all().await?;
    info!(count = labs.len(), "list labs");
    Ok(Json(labs))
}

#[utoipa::path(
    post, path = "/labs", tag = "labs",
    request_body = crate::openapi::LabInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::LabDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "keyName already in use", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<LabInput>,
) -> Result<Json<lab::Model>, JsonApiError> {
    info!(key_name = %input.key_name, "lab_create_request");
    let created = state.labs.create(input).await?;
    info!(id = created.id, external_id = %created.external_id, "created lab");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/labs/{id}", tag = "labs",
    params(("id" = i32, Path, description = "Lab numeric id")),
    responses(
        (status = 200, description = "Lab, or null when absent", body = crate::openapi::LabDoc),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Option<lab::Model>>, JsonApiError> {
    Ok(Json(state.labs.get_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/labs/key/{keyName}", tag = "labs",
    params(("keyName" = String, Path, description = "Lab key name")),
    responses((status = 200, description = "Lab, or null when absent", body = crate::openapi::LabDoc))
)]
pub async fn get_by_key_name(
    State(state): State<ServerState>,
    Path(key_name): Path<String>,
) -> Result<Json<Option<lab::Model>>, JsonApiError> {
    Ok(Json(state.labs.get_by_key_name(&key_name).await?))
}

#[utoipa::path(
    get, path = "/labs/ulid/{externalId}", tag = "labs",
    params(("externalId" = String, Path, description = "Lab external id")),
    responses((status = 200, description = "Lab, or null when absent", body = crate::openapi::LabDoc))
)]
pub async fn get_by_external_id(
    State(state): State<ServerState>,
    Path(external_id): Path<String>,
) -> Result<Json<Option<lab::Model>>, JsonApiError> {
    Ok(Json(state.labs.get_by_external_id(&external_id).await?))
}

#[utoipa::path(
    patch, path = "/labs/{externalId}", tag = "labs",
    params(("externalId" = String, Path, description = "Lab external id")),
    request_body = crate::openapi::LabInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::LabDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "keyName already in use", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(external_id): Path<String>,
    ValidatedJson(input): ValidatedJson<LabInput>,
) -> Result<Json<lab::Model>, JsonApiError> {
    let updated = state.labs.update(&external_id, input).await?;
    info!(id = updated.id, external_id = %updated.external_id, "updated lab");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/labs/{id}", tag = "labs",
    params(("id" = i32, Path, description = "Lab numeric id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.labs.delete_by_id(id).await?;
    info!(id, "deleted lab");
    Ok(StatusCode::OK)
}
