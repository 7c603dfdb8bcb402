use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::errors::JsonApiError;

/// `Json<T>` that also runs `T::validate`, rejecting with 400 before the
/// handler body executes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| JsonApiError::validation(rejection.body_text()))?;
        value.validate().map_err(|errs| {
            JsonApiError::validation(errs.to_string()).with_fields(field_errors_json(&errs))
        })?;
        Ok(ValidatedJson(value))
    }
}

/// Per-field failures keyed by the JSON (camelCase) name the client sent.
pub fn field_errors_json(errs: &ValidationErrors) -> Value {
    let fields: Map<String, Value> = errs
        .field_errors()
        .into_iter()
        .map(|(field, list)| (wire_name(&field), serde_json::to_value(list).unwrap_or_default()))
        .collect();
    Value::Object(fields)
}

fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
