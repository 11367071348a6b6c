use crate::server::{
    error::{validation::FieldError, AppError},
    model::{
        course::{
            CourseValues, UpdateCourseParams, UpdateOutcome, DELETED_BY_ANOTHER_USER,
            MODIFIED_BY_ANOTHER_USER,
        },
        outcome::DeleteOutcome,
    },
    service::course::CourseService,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn edit(id: i32, title: &str, credits: i32, row_version: i32) -> UpdateCourseParams {
    UpdateCourseParams {
        id,
        values: CourseValues {
            title: title.to_string(),
            credits,
            department_id: None,
        },
        row_version,
    }
}

async fn stored_title(db: &DatabaseConnection, id: i32) -> String {
    entity::prelude::Course::find_by_id(id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .title
}

/// Tests two users editing the same course from the same original values.
///
/// The second save must not overwrite the first: it reports the stored title as the
/// current value and hands back the fresh row version, with which a retry succeeds.
///
/// Expected: Conflict with "Current Value: Calculus II", then Updated on retry
#[tokio::test]
async fn stale_edit_reports_current_values_and_fresh_token() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .title("Calculus")
        .credits(4)
        .build()
        .await
        .unwrap();
    let original_token = course.row_version;
    let service = CourseService::new(db);

    let first = service
        .update(edit(course.id, "Calculus II", 4, original_token))
        .await
        .unwrap();
    let UpdateOutcome::Updated(after_first) = first else {
        panic!("first edit should succeed");
    };

    let second = service
        .update(edit(course.id, "Calculus", 4, original_token))
        .await
        .unwrap();
    let UpdateOutcome::Conflict(conflict) = second else {
        panic!("second edit should conflict");
    };
    assert_eq!(conflict.message, MODIFIED_BY_ANOTHER_USER);
    assert_eq!(
        conflict.field_errors,
        vec![FieldError::new("title", "Current Value: Calculus II")]
    );
    assert_eq!(conflict.row_version, Some(after_first.row_version));
    assert_eq!(stored_title(db, course.id).await, "Calculus II");

    let retry = service
        .update(edit(course.id, "Calculus", 4, after_first.row_version))
        .await
        .unwrap();
    let UpdateOutcome::Updated(after_retry) = retry else {
        panic!("retry with fresh token should succeed");
    };
    assert_eq!(after_retry.title, "Calculus");
    assert_eq!(after_retry.row_version, after_first.row_version + 1);
}

/// Tests a stale edit whose values happen to equal the stored ones.
///
/// Expected: Conflict with no field messages and the fresh token
#[tokio::test]
async fn stale_edit_with_equal_values_still_conflicts() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .title("Calculus")
        .credits(4)
        .row_version(3)
        .build()
        .await
        .unwrap();

    let outcome = CourseService::new(db)
        .update(edit(course.id, "Calculus", 4, 2))
        .await
        .unwrap();

    let UpdateOutcome::Conflict(conflict) = outcome else {
        panic!("stale token should conflict");
    };
    assert!(conflict.field_errors.is_empty());
    assert_eq!(conflict.row_version, Some(3));
}

/// Tests editing a course another user deleted in the meantime.
///
/// Expected: Conflict with the deleted message and no token
#[tokio::test]
async fn edit_of_deleted_course_reports_deletion() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db, None).await.unwrap();
    let service = CourseService::new(db);
    service.delete(course.id, course.row_version).await.unwrap();

    let outcome = service
        .update(edit(course.id, "Calculus", 4, course.row_version))
        .await
        .unwrap();

    let UpdateOutcome::Conflict(conflict) = outcome else {
        panic!("edit of deleted course should conflict");
    };
    assert_eq!(conflict.message, DELETED_BY_ANOTHER_USER);
    assert!(conflict.field_errors.is_empty());
    assert_eq!(conflict.row_version, None);
}

/// Tests that invalid credits are rejected before anything is written.
///
/// Expected: Err(Validation) on create and edit, no row inserted, stored course unchanged
#[tokio::test]
async fn rejects_credits_out_of_range_before_persisting() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CourseService::new(db);

    let result = service
        .create(CourseValues {
            title: "Quantum Mechanics".to_string(),
            credits: 6,
            department_id: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::Validation(ref e)) if e[0].field == "credits"));
    assert_eq!(entity::prelude::Course::find().count(db).await.unwrap(), 0);

    let course = factory::course::CourseFactory::new(db)
        .title("Calculus")
        .build()
        .await
        .unwrap();
    let result = service
        .update(edit(course.id, "Calculus II", -1, course.row_version))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(stored_title(db, course.id).await, "Calculus");
}

/// Tests creating a course in a department that does not exist.
///
/// Expected: Err(Validation) on department_id
#[tokio::test]
async fn rejects_unknown_department() {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseService::new(db)
        .create(CourseValues {
            title: "Calculus".to_string(),
            credits: 4,
            department_id: Some(9999),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ref e)) if e.len() == 1 && e[0].field == "department_id"
    ));
}

/// Tests deleting with a stale token, the current token, then again.
///
/// Expected: Conflict, then Deleted, then AlreadyGone
#[tokio::test]
async fn delete_reports_conflict_then_deletes_then_already_gone() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db, None).await.unwrap();
    let service = CourseService::new(db);
    let UpdateOutcome::Updated(edited) = service
        .update(edit(course.id, "Literature", 4, course.row_version))
        .await
        .unwrap()
    else {
        panic!("edit should succeed");
    };

    let stale = service.delete(course.id, course.row_version).await.unwrap();
    assert_eq!(stale, DeleteOutcome::Conflict);
    assert_eq!(stored_title(db, course.id).await, "Literature");

    let current = service.delete(course.id, edited.row_version).await.unwrap();
    assert_eq!(current, DeleteOutcome::Deleted);

    let again = service.delete(course.id, edited.row_version).await.unwrap();
    assert_eq!(again, DeleteOutcome::AlreadyGone);
}

/// Tests course details.
///
/// Expected: Some with the enrollment count, None for an unknown ID
#[tokio::test]
async fn details_include_enrollment_count() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db, None).await.unwrap();
    let student = factory::create_student(db).await.unwrap();
    factory::create_enrollment(db, course.id, student.id)
        .await
        .unwrap();
    let service = CourseService::new(db);

    let details = service.get_details(course.id).await.unwrap().unwrap();
    assert_eq!(details.course.id, course.id);
    assert_eq!(details.enrollment_count, 1);

    assert!(service.get_details(course.id + 1).await.unwrap().is_none());
}
