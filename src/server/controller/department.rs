use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, department::DepartmentDto},
    server::{error::AppError, service::department::DepartmentService, state::AppState},
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Get all departments.
///
/// Returns every department ordered by name, for populating the department selector
/// on course forms.
///
/// # Returns
/// - `200 OK` - List of departments
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved departments", body = Vec<DepartmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_departments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let departments = service.get_all().await?;

    Ok(Json(
        departments
            .into_iter()
            .map(|d| d.into_dto())
            .collect::<Vec<DepartmentDto>>(),
    ))
}
