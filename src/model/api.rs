use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Error body returned by every failing API call.
///
/// `field_errors` carries per-field messages for validation failures and edit
/// conflicts; `row_version` carries the fresh concurrency token after a conflict
/// on a record that still exists.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldErrorDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<i32>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field_errors: Vec::new(),
            row_version: None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}
