use crate::model::api::{ErrorDto, FieldErrorDto};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
    pub field_errors: Vec<FieldErrorDto>,
    /// Fresh concurrency token sent with an edit conflict.
    pub row_version: Option<i32>,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field_errors: Vec::new(),
            row_version: None,
        }
    }

    pub fn from_dto(status: u64, dto: ErrorDto) -> Self {
        Self {
            status,
            message: dto.error,
            field_errors: dto.field_errors,
            row_version: dto.row_version,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
