use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": title, "message": detail, "fields": {...}}`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<serde_json::Value>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, message: Option<String>) -> Self {
        Self { status, error: error.to_string(), message, fields: None }
    }

    pub fn with_fields(mut self, fields: serde_json::Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(message.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(&self)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(_) => Self::validation(e.to_string()),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            ServiceError::Conflict(_) => Self::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string())),
            // 细节仅写入日志，不返回给客户端
            _ => {
                error!(err = %e, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("unexpected server error".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("lab"), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = JsonApiError::from(ServiceError::Db("connection refused at 10.0.0.5:5432".into()));
        let body = serde_json::to_value(&err).unwrap();
        assert_eq!(body["error"], "Internal Server Error");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.5"));
    }

    #[test]
    fn not_found_message_is_not_doubled() {
        let err = JsonApiError::from(ServiceError::not_found("lab"));
        assert_eq!(err.message.as_deref(), Some("lab not found"));
    }

    #[test]
    fn body_omits_empty_fields() {
        let body = serde_json::to_value(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None)).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Not Found"}));
    }
}
