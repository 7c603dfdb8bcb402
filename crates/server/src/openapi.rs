use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabDoc {
    pub id: i32,
    pub external_id: String,
    pub key_name: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabInputDoc {
    /// 2-50 characters, not blank, unique
    pub key_name: String,
    /// 3-100 characters, not blank
    pub name: String,
    /// at most 500 characters
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultDoc {
    pub id: i32,
    pub external_id: String,
    pub lab_id: i32,
    pub nif: String,
    pub patient_name: String,
    /// epoch milliseconds
    pub date: i64,
    pub data: String,
    pub status: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultInputDoc {
    pub lab_id: i32,
    /// 2-50 characters, not blank
    pub nif: String,
    /// 3-100 characters, not blank
    pub patient_name: String,
    pub date: i64,
    pub data: String,
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::labs::list,
        crate::routes::labs::create,
        crate::routes::labs::get,
        crate::routes::labs::get_by_key_name,
        crate::routes::labs::get_by_external_id,
        crate::routes::labs::update,
        crate::routes::labs::delete,
        crate::routes::results::list,
        crate::routes::results::create,
        crate::routes::results::get,
        crate::routes::results::get_by_nif,
        crate::routes::results::get_by_external_id,
        crate::routes::results::list_by_lab,
        crate::routes::results::update,
        crate::routes::results::delete,
    ),
    components(
        schemas(
            HealthResponse,
            LabDoc,
            LabInputDoc,
            ResultDoc,
            ResultInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "labs"),
        (name = "results")
    )
)]
pub struct ApiDoc;
