use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// Lab fields accepted on create and on update. Update replaces all of them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LabInput {
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 50, message = "keyName must be between 2 and 50 characters")
    )]
    pub key_name: String,
    #[validate(
        custom(function = "not_blank"),
        length(min = 3, max = 100, message = "name must be between 3 and 100 characters")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "description cannot exceed 500 characters"))]
    pub description: Option<String>,
}
