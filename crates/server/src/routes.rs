pub mod labs;
pub mod results;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, OpenAPI document, labs and results.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let labs = Router::new()
        .route("/labs", get(labs::list).post(labs::create))
        .route("/labs/key/:key_name", get(labs::get_by_key_name))
        .route("/labs/ulid/:external_id", get(labs::get_by_external_id))
        // GET/DELETE 使用数值 id，PATCH 使用 externalId
        .route("/labs/:id", get(labs::get).patch(labs::update).delete(labs::delete));

    let results = Router::new()
        .route("/api/results", get(results::list).post(results::create))
        .route("/api/results/nif/:nif", get(results::get_by_nif))
        .route("/api/results/ulid/:external_id", get(results::get_by_external_id))
        .route("/api/results/lab/:lab_id", get(results::list_by_lab))
        .route(
            "/api/results/:id",
            get(results::get).patch(results::update).delete(results::delete),
        );

    public
        .merge(labs)
        .merge(results)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
