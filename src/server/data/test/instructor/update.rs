use super::*;

fn params() -> InstructorParams {
    InstructorParams {
        last_name: "Kapoor".to_string(),
        first_mid_name: "Candace".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2001, 1, 15).unwrap(),
    }
}

/// Tests creating then editing an instructor.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_instructor_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    let created = repo
        .create(InstructorParams {
            last_name: "Kapur".to_string(),
            ..params()
        })
        .await?;

    let updated = repo.update(created.id, params()).await?.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.last_name, "Kapoor");
    assert_eq!(updated.first_mid_name, "Candace");
    assert_eq!(updated.hire_date, params().hire_date);

    Ok(())
}

/// Tests editing an unknown instructor.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn returns_none_for_missing_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = InstructorRepository::new(db).update(9999, params()).await?;

    assert!(updated.is_none());
    assert_eq!(entity::prelude::Instructor::find().count(db).await?, 0);

    Ok(())
}
