use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        instructor::{InstructorDetailsDto, InstructorDto, InstructorFormDto},
    },
    server::{
        error::AppError, model::instructor::InstructorParams,
        service::instructor::InstructorService, state::AppState,
    },
};

/// Tag for grouping instructor endpoints in OpenAPI documentation
pub static INSTRUCTOR_TAG: &str = "instructor";

/// Get all instructors.
///
/// # Returns
/// - `200 OK` - Instructors ordered by last name, with office location
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/instructors",
    tag = INSTRUCTOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved instructors", body = Vec<InstructorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructors(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = InstructorService::new(&state.db);

    let instructors = service.get_all().await?;

    Ok(Json(
        instructors
            .into_iter()
            .map(|i| i.into_dto())
            .collect::<Vec<InstructorDto>>(),
    ))
}

/// Get an instructor by ID with office and taught courses.
///
/// # Returns
/// - `200 OK` - Instructor details
/// - `404 Not Found` - Instructor not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved instructor", body = InstructorDetailsDto),
        (status = 404, description = "Instructor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InstructorService::new(&state.db);

    let details = service
        .get_details(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;

    Ok(Json(details.into_dto()))
}

/// Create a new instructor.
///
/// # Returns
/// - `201 Created` - Successfully created instructor
/// - `422 Unprocessable Entity` - Missing or too long name
/// - `500 Internal Server Error` - Unable to save changes
#[utoipa::path(
    post,
    path = "/api/instructors",
    tag = INSTRUCTOR_TAG,
    request_body = InstructorFormDto,
    responses(
        (status = 201, description = "Successfully created instructor", body = InstructorDto),
        (status = 422, description = "Invalid instructor data", body = ErrorDto),
        (status = 500, description = "Unable to save changes", body = ErrorDto)
    ),
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    Json(payload): Json<InstructorFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = InstructorService::new(&state.db);

    let instructor = service.create(InstructorParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(instructor.into_dto())))
}

/// Edit an instructor's name and hire date.
///
/// # Returns
/// - `200 OK` - Successfully updated instructor
/// - `404 Not Found` - Instructor not found
/// - `422 Unprocessable Entity` - Missing or too long name
/// - `500 Internal Server Error` - Unable to save changes
#[utoipa::path(
    put,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor ID")
    ),
    request_body = InstructorFormDto,
    responses(
        (status = 200, description = "Successfully updated instructor", body = InstructorDto),
        (status = 404, description = "Instructor not found", body = ErrorDto),
        (status = 422, description = "Invalid instructor data", body = ErrorDto),
        (status = 500, description = "Unable to save changes", body = ErrorDto)
    ),
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InstructorFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = InstructorService::new(&state.db);

    let instructor = service
        .update(id, InstructorParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;

    Ok(Json(instructor.into_dto()))
}

/// Delete an instructor.
///
/// Removes the office assignment and course assignments and clears the instructor as
/// department administrator. An instructor that no longer exists counts as deleted.
///
/// # Returns
/// - `204 No Content` - Instructor deleted, or already gone
/// - `500 Internal Server Error` - Unable to save changes
#[utoipa::path(
    delete,
    path = "/api/instructors/{id}",
    tag = INSTRUCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Instructor ID")
    ),
    responses(
        (status = 204, description = "Instructor deleted or already gone"),
        (status = 500, description = "Unable to save changes", body = ErrorDto)
    ),
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InstructorService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
