use crate::{
    client::model::error::ApiError,
    model::course::{CourseDetailsDto, CourseDto, CreateCourseDto, UpdateCourseDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get all courses
pub async fn get_courses() -> Result<Vec<CourseDto>, ApiError> {
    let response = send_request(get("/api/courses")).await?;
    parse_response(response).await
}

/// Get a course with its enrollment count and current row version
pub async fn get_course(id: i32) -> Result<CourseDetailsDto, ApiError> {
    let url = format!("/api/courses/{}", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Create a new course
pub async fn create_course(payload: CreateCourseDto) -> Result<CourseDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/courses").body(body)).await?;
    parse_response(response).await
}

/// Edit a course; a 409 error carries the current values and fresh row version
pub async fn update_course(id: i32, payload: UpdateCourseDto) -> Result<CourseDto, ApiError> {
    let url = format!("/api/courses/{}", id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete a course read with the given row version
pub async fn delete_course(id: i32, row_version: i32) -> Result<(), ApiError> {
    let url = format!("/api/courses/{}?row_version={}", id, row_version);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
