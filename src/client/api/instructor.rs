use crate::{
    client::model::error::ApiError,
    model::instructor::{InstructorDetailsDto, InstructorDto, InstructorFormDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

/// Get all instructors
pub async fn get_instructors() -> Result<Vec<InstructorDto>, ApiError> {
    let response = send_request(get("/api/instructors")).await?;
    parse_response(response).await
}

/// Get an instructor with office and taught courses
pub async fn get_instructor(id: i32) -> Result<InstructorDetailsDto, ApiError> {
    let url = format!("/api/instructors/{}", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Create a new instructor
pub async fn create_instructor(payload: InstructorFormDto) -> Result<InstructorDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/instructors").body(body)).await?;
    parse_response(response).await
}

/// Edit an instructor
pub async fn update_instructor(
    id: i32,
    payload: InstructorFormDto,
) -> Result<InstructorDto, ApiError> {
    let url = format!("/api/instructors/{}", id);
    let body = serialize_json(&payload)?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete an instructor
pub async fn delete_instructor(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/instructors/{}", id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
