use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::lab_result;
use service::results::domain::ResultInput;
use tracing::info;

use crate::{errors::JsonApiError, extract::ValidatedJson, state::ServerState};

#[utoipa::path(
    get, path = "/api/results", tag = "results",
    responses(
        (status = 200, description = "All results", body = [crate::openapi::ResultDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<lab_result::Model>>, JsonApiError> {
    let results = state.results.get_all().await?;
    info!(count = results.len(), "list results");
    Ok(Json(results))
}

#[utoipa::path(
    post, path = "/api/results", tag = "results",
    request_body = crate::openapi::ResultInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ResultDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(input): ValidatedJson<ResultInput>,
) -> Result<Json<lab_result::Model>, JsonApiError> {
    info!(lab_id = input.lab_id, "result_create_request");
    let created = state.results.create(input).await?;
    info!(id = created.id, external_id = %created.external_id, lab_id = created.lab_id, "created result");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/results/{id}", tag = "results",
    params(("id" = i32, Path, description = "Result numeric id")),
    responses(
        (status = 200, description = "Result, or null when absent", body = crate::openapi::ResultDoc),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<lab_result::Model>>, JsonApiError> {
    Ok(Json(state.results.get_by_id(id).await?))
}

/// Several results may share a nif; the earliest one is returned.
#[utoipa::path(
    get, path = "/api/results/nif/{nif}", tag = "results",
    params(("nif" = String, Path, description = "Patient tax id")),
    responses((status = 200, description = "Result, or null when absent", body = crate::openapi::ResultDoc))
)]
pub async fn get_by_nif(
    State(state): State<ServerState>,
    Path(nif): Path<String>,
) -> Result<Json<Option<lab_result::Model>>, JsonApiError> {
    Ok(Json(state.results.get_by_nif(&nif).await?))
}

#[utoipa::path(
    get, path = "/api/results/ulid/{externalId}", tag = "results",
    params(("externalId" = String, Path, description = "Result external id")),
    responses((status = 200, description = "Result, or null when absent", body = crate::openapi::ResultDoc))
)]
pub async fn get_by_external_id(
    State(state): State<ServerState>,
    Path(external_id): Path<String>,
) -> Result<Json<Option<lab_result::Model>>, JsonApiError> {
    Ok(Json(state.results.get_by_external_id(&external_id).await?))
}

#[utoipa::path(
    get, path = "/api/results/lab/{labId}", tag = "results",
    params(("labId" = i32, Path, description = "Lab numeric id")),
    responses((status = 200, description = "Results recorded for the lab", body = [crate::openapi::ResultDoc]))
)]
pub async fn list_by_lab(
    State(state): State<ServerState>,
    Path(lab_id): Path<i32>,
) -> Result<Json<Vec<lab_result::Model>>, JsonApiError> {
    let results = state.results.get_by_lab_id(lab_id).await?;
    info!(lab_id, count = results.len(), "list results by lab");
    Ok(Json(results))
}

#[utoipa::path(
    patch, path = "/api/results/{externalId}", tag = "results",
    params(("externalId" = String, Path, description = "Result external id")),
    request_body = crate::openapi::ResultInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ResultDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(external_id): Path<String>,
    ValidatedJson(input): ValidatedJson<ResultInput>,
) -> Result<Json<lab_result::Model>, JsonApiError> {
    let updated = state.results.update(&external_id, input).await?;
    info!(id = updated.id, external_id = %updated.external_id, status = %updated.status, "updated result");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/results/{id}", tag = "results",
    params(("id" = i32, Path, description = "Result numeric id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.results.delete_by_id(id).await?;
    info!(id, "deleted result");
    Ok(StatusCode::OK)
}
