use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        api::FieldErrorDto,
        course::{DeleteCourseQuery, UpdateCourseDto, DELETE_CONFLICT_MESSAGE},
    },
    server::{
        controller::course::{delete_course, update_course},
        model::course::MODIFIED_BY_ANOTHER_USER,
        state::AppState,
    },
};

use super::error_body;

fn edit(title: &str, credits: i32, row_version: i32) -> UpdateCourseDto {
    UpdateCourseDto {
        title: title.to_string(),
        credits,
        department_id: None,
        row_version,
    }
}

/// Tests the response for an edit submitted with a stale row version.
///
/// The body must let the form redisplay: the summary message, one message per
/// differing field with the stored value, and the fresh row version.
///
/// Expected: 409 with field errors and row version 2
#[tokio::test]
async fn stale_edit_responds_conflict_with_current_values() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let course = factory::course::CourseFactory::new(&db)
        .title("Calculus II")
        .credits(4)
        .row_version(2)
        .build()
        .await
        .unwrap();

    let response = update_course(
        State(AppState::new(db)),
        Path(course.id),
        Json(edit("Calculus", 4, 1)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = error_body(response).await;
    assert_eq!(body.error, MODIFIED_BY_ANOTHER_USER);
    assert_eq!(
        body.field_errors,
        vec![FieldErrorDto {
            field: "title".to_string(),
            message: "Current Value: Calculus II".to_string(),
        }]
    );
    assert_eq!(body.row_version, Some(2));
}

/// Tests the response for an edit with credits out of range.
///
/// Expected: 422 with a message on the credits field
#[tokio::test]
async fn invalid_edit_responds_unprocessable_entity() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let course = factory::create_course(&db, None).await.unwrap();

    let response = update_course(
        State(AppState::new(db)),
        Path(course.id),
        Json(edit("Calculus", 6, course.row_version)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = error_body(response).await;
    assert_eq!(body.field_errors.len(), 1);
    assert_eq!(body.field_errors[0].field, "credits");
    assert_eq!(body.row_version, None);
}

/// Tests deleting a course that no longer exists.
///
/// Expected: 204 No Content
#[tokio::test]
async fn delete_of_missing_course_responds_no_content() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let response = delete_course(
        State(AppState::new(db)),
        Path(9999),
        Query(DeleteCourseQuery { row_version: 1 }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Tests deleting a course with a stale row version.
///
/// Expected: 409 with the delete conflict message
#[tokio::test]
async fn stale_delete_responds_conflict() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let course = factory::course::CourseFactory::new(&db)
        .row_version(3)
        .build()
        .await
        .unwrap();

    let response = delete_course(
        State(AppState::new(db)),
        Path(course.id),
        Query(DeleteCourseQuery { row_version: 2 }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = error_body(response).await;
    assert_eq!(body.error, DELETE_CONFLICT_MESSAGE);
}
