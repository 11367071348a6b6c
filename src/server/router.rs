use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{course, department, instructor},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "University Records API"),
    tags(
        (name = "course", description = "Courses, edited and deleted under optimistic concurrency"),
        (name = "instructor", description = "Instructors with office and course assignments"),
        (name = "department", description = "Departments for course forms")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(course::get_courses, course::create_course))
        .routes(routes!(
            course::get_course,
            course::update_course,
            course::delete_course
        ))
        .routes(routes!(
            instructor::get_instructors,
            instructor::create_instructor
        ))
        .routes(routes!(
            instructor::get_instructor,
            instructor::update_instructor,
            instructor::delete_instructor
        ))
        .routes(routes!(department::get_departments))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
