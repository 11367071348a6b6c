use crate::server::{
    error::AppError,
    model::{instructor::InstructorParams, outcome::DeleteOutcome},
    service::instructor::InstructorService,
};
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn params(last_name: &str) -> InstructorParams {
    InstructorParams {
        last_name: last_name.to_string(),
        first_mid_name: "Roger".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2004, 2, 12).unwrap(),
    }
}

/// Tests creating an instructor with a blank last name.
///
/// Expected: Err(Validation) and no row inserted
#[tokio::test]
async fn rejects_blank_last_name() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InstructorService::new(db).create(params("")).await;

    assert!(matches!(result, Err(AppError::Validation(ref e)) if e[0].field == "last_name"));
    assert_eq!(entity::prelude::Instructor::find().count(db).await.unwrap(), 0);
}

/// Tests creating and then listing instructors.
///
/// Expected: list ordered by last name
#[tokio::test]
async fn lists_created_instructors_by_last_name() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = InstructorService::new(db);

    service.create(params("Zheng")).await.unwrap();
    service.create(params("Harui")).await.unwrap();

    let names: Vec<_> = service
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.last_name)
        .collect();
    assert_eq!(names, vec!["Harui", "Zheng"]);
}

/// Tests editing an unknown instructor.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_of_missing_instructor_returns_none() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InstructorService::new(db)
        .update(9999, params("Zheng"))
        .await
        .unwrap();

    assert!(result.is_none());
}

/// Tests deleting an instructor twice.
///
/// Expected: Deleted, then AlreadyGone
#[tokio::test]
async fn delete_then_already_gone() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await.unwrap();
    let service = InstructorService::new(db);

    assert_eq!(
        service.delete(instructor.id).await.unwrap(),
        DeleteOutcome::Deleted
    );
    assert_eq!(
        service.delete(instructor.id).await.unwrap(),
        DeleteOutcome::AlreadyGone
    );
}
