use crate::model::api::FieldErrorDto;

/// A message attached to a single input field.
///
/// Used both for validation failures and for the "Current Value" messages produced
/// when an edit loses an optimistic concurrency race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the DTO field the message belongs to.
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field.to_string(),
            message: self.message,
        }
    }
}
