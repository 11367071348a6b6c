use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{
            CourseDetailsDto, CourseDto, CreateCourseDto, DeleteCourseQuery, UpdateCourseDto,
            DELETE_CONFLICT_MESSAGE,
        },
    },
    server::{
        error::AppError,
        model::{
            course::{CourseValues, UpdateCourseParams, UpdateOutcome},
            outcome::DeleteOutcome,
        },
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Get all courses.
///
/// Returns every course with the name of its department, ordered by course number.
///
/// # Returns
/// - `200 OK` - List of courses
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let courses = service.get_all().await?;

    Ok(Json(
        courses
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<CourseDto>>(),
    ))
}

/// Get a course by ID.
///
/// Serves both the details view and the edit form; the returned `row_version` is the
/// token the client must send back when editing or deleting.
///
/// # Arguments
/// - `id` - Course number
///
/// # Returns
/// - `200 OK` - Course with enrollment count
/// - `404 Not Found` - Course not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDetailsDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let details = service
        .get_details(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    Ok(Json(details.into_dto()))
}

/// Create a new course.
///
/// # Arguments
/// - `payload` - Title, credits and optional department
///
/// # Returns
/// - `201 Created` - Successfully created course
/// - `422 Unprocessable Entity` - Invalid title, credits or department
/// - `500 Internal Server Error` - Unable to save changes
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 422, description = "Invalid course data", body = ErrorDto),
        (status = 500, description = "Unable to save changes", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service.create(CourseValues::from_create_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Edit a course under optimistic concurrency.
///
/// The edit is applied only when `row_version` in the body equals the stored one.
/// Otherwise nothing is written and the response is `409 Conflict` whose body lists,
/// per differing field, the value currently stored, plus the fresh `row_version` to
/// retry with. If the course was deleted meanwhile the body has no `row_version`.
///
/// # Arguments
/// - `id` - Course number
/// - `payload` - New values and the row version they were read with
///
/// # Returns
/// - `200 OK` - Updated course with its new row version
/// - `409 Conflict` - Course was changed or deleted by another user
/// - `422 Unprocessable Entity` - Invalid title, credits or department
/// - `500 Internal Server Error` - Unable to save changes
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course number")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 409, description = "Course was changed or deleted by another user", body = ErrorDto),
        (status = 422, description = "Invalid course data", body = ErrorDto),
        (status = 500, description = "Unable to save changes", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<Response, AppError> {
    let service = CourseService::new(&state.db);

    let outcome = service
        .update(UpdateCourseParams::from_dto(id, payload))
        .await?;

    Ok(match outcome {
        UpdateOutcome::Updated(course) => Json(course.into_dto()).into_response(),
        UpdateOutcome::Conflict(conflict) => {
            (StatusCode::CONFLICT, Json(conflict.into_dto())).into_response()
        }
    })
}

/// Delete a course under optimistic concurrency.
///
/// Removes the course with its enrollments and course assignments when `row_version`
/// equals the stored one. A course that no longer exists counts as deleted.
///
/// # Arguments
/// - `id` - Course number
/// - `row_version` - Token read with the values shown on the confirmation view
///
/// # Returns
/// - `204 No Content` - Course deleted, or already gone
/// - `409 Conflict` - Course was changed by another user
/// - `500 Internal Server Error` - Unable to save changes
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course number"),
        DeleteCourseQuery
    ),
    responses(
        (status = 204, description = "Course deleted or already gone"),
        (status = 409, description = "Course was changed by another user", body = ErrorDto),
        (status = 500, description = "Unable to save changes", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<DeleteCourseQuery>,
) -> Result<Response, AppError> {
    let service = CourseService::new(&state.db);

    Ok(match service.delete(id, query.row_version).await? {
        DeleteOutcome::Deleted | DeleteOutcome::AlreadyGone => {
            StatusCode::NO_CONTENT.into_response()
        }
        DeleteOutcome::Conflict => (
            StatusCode::CONFLICT,
            Json(ErrorDto::new(DELETE_CONFLICT_MESSAGE)),
        )
            .into_response(),
    })
}
