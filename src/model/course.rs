use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Sent with a `409` from `DELETE /api/courses/{id}` and shown on the delete
/// confirmation view reloaded after that conflict.
pub const DELETE_CONFLICT_MESSAGE: &str = "The record you attempted to delete was modified by \
another user after you got the original value. The delete operation was canceled and the current \
values in the database have been displayed. If you still want to delete this record, click the \
Delete button again. Otherwise go back to the list.";

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub credits: i32,
    pub department_id: Option<i32>,
    pub department_name: Option<String>,
    /// Concurrency token to echo back on edit and delete.
    pub row_version: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CourseDetailsDto {
    pub course: CourseDto,
    pub enrollment_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateCourseDto {
    pub title: String,
    pub credits: i32,
    pub department_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateCourseDto {
    pub title: String,
    pub credits: i32,
    pub department_id: Option<i32>,
    /// Token read together with the values being edited.
    pub row_version: i32,
}

/// Query string for `DELETE /api/courses/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(
    feature = "server",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
pub struct DeleteCourseQuery {
    pub row_version: i32,
}
