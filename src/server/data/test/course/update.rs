use super::*;

fn params(id: i32, title: &str, row_version: i32) -> UpdateCourseParams {
    UpdateCourseParams {
        id,
        values: CourseValues {
            title: title.to_string(),
            credits: 4,
            department_id: None,
        },
        row_version,
    }
}

/// Tests updating a course with the current row version.
///
/// Verifies that the values are written, the row version is incremented by one and the
/// written course is returned.
///
/// Expected: Ok(Some) with row version 2
#[tokio::test]
async fn updates_course_with_matching_row_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db, None).await?;
    let repo = CourseRepository::new(db);

    let updated = repo
        .update(params(course.id, "Calculus", course.row_version))
        .await?
        .unwrap();

    assert_eq!(updated.title, "Calculus");
    assert_eq!(updated.row_version, course.row_version + 1);
    let stored = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(stored.title, "Calculus");
    assert_eq!(stored.credits, 4);
    assert_eq!(stored.row_version, course.row_version + 1);

    Ok(())
}

/// Tests updating a course with a stale row version.
///
/// Verifies that the stored values are left untouched when the token no longer matches.
///
/// Expected: Ok(None) and unchanged course
#[tokio::test]
async fn leaves_course_untouched_with_stale_row_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .title("Calculus II")
        .row_version(5)
        .build()
        .await?;
    let repo = CourseRepository::new(db);

    let updated = repo.update(params(course.id, "Calculus", 4)).await?;

    assert!(updated.is_none());
    let stored = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(stored.title, "Calculus II");
    assert_eq!(stored.row_version, 5);

    Ok(())
}

/// Tests that the same token cannot be used for two successive writes.
///
/// Expected: first update Ok(Some), second Ok(None)
#[tokio::test]
async fn second_write_with_same_token_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db, None).await?;
    let repo = CourseRepository::new(db);

    assert!(repo
        .update(params(course.id, "First", course.row_version))
        .await?
        .is_some());
    assert!(repo
        .update(params(course.id, "Second", course.row_version))
        .await?
        .is_none());

    assert_eq!(repo.get_by_id(course.id).await?.unwrap().title, "First");

    Ok(())
}

/// Tests updating a course that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CourseRepository::new(db)
        .update(params(9999, "Calculus", INITIAL_ROW_VERSION))
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests updating with the largest possible row version while the stored one is lower.
///
/// The increment happens in the statement, so an out-of-range token only fails to match.
///
/// Expected: Ok(None) and unchanged course
#[tokio::test]
async fn largest_row_version_is_treated_as_stale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db, None).await?;
    let repo = CourseRepository::new(db);

    let updated = repo
        .update(params(course.id, "Calculus", i32::MAX))
        .await?;

    assert!(updated.is_none());
    let stored = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(stored.title, course.title);
    assert_eq!(stored.row_version, course.row_version);

    Ok(())
}

/// Tests that the returned course carries its department name.
///
/// Expected: Ok(Some) with the department resolved
#[tokio::test]
async fn returns_updated_course_with_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::DepartmentFactory::new(db)
        .name("Mathematics")
        .build()
        .await?;
    let course = factory::create_course(db, None).await?;
    let repo = CourseRepository::new(db);

    let updated = repo
        .update(UpdateCourseParams {
            id: course.id,
            values: CourseValues {
                title: "Calculus".to_string(),
                credits: 4,
                department_id: Some(department.id),
            },
            row_version: course.row_version,
        })
        .await?
        .unwrap();

    assert_eq!(updated.department_id, Some(department.id));
    assert_eq!(updated.department_name.as_deref(), Some("Mathematics"));

    Ok(())
}
