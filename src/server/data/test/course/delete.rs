use super::*;

/// Tests deleting a course together with its dependents.
///
/// Verifies that enrollments and course assignments of the course are removed in the
/// same operation while the instructor and department remain.
///
/// Expected: Ok(true) and no remaining dependents
#[tokio::test]
async fn deletes_course_with_enrollments_and_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, department, course) = factory::helpers::create_assigned_course(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, course.id, student.id).await?;

    let repo = CourseRepository::new(db);
    let deleted = repo.delete(course.id, course.row_version).await?;

    assert!(deleted);
    assert!(!repo.exists(course.id).await?);

    let enrollments = entity::prelude::Enrollment::find()
        .filter(entity::enrollment::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    let assignments = entity::prelude::CourseAssignment::find()
        .filter(entity::course_assignment::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(enrollments, 0);
    assert_eq!(assignments, 0);

    assert!(entity::prelude::Instructor::find_by_id(instructor.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Department::find_by_id(department.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a course with a stale row version.
///
/// Verifies that neither the course nor its dependents are removed.
///
/// Expected: Ok(false) and everything still present
#[tokio::test]
async fn keeps_course_and_dependents_with_stale_row_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, course) = factory::helpers::create_assigned_course(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, course.id, student.id).await?;

    let repo = CourseRepository::new(db);
    let deleted = repo.delete(course.id, course.row_version + 1).await?;

    assert!(!deleted);
    assert!(repo.exists(course.id).await?);
    assert_eq!(repo.count_enrollments(course.id).await?, 1);

    let assignments = entity::prelude::CourseAssignment::find()
        .filter(entity::course_assignment::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(assignments, 1);

    Ok(())
}

/// Tests deleting a course that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CourseRepository::new(db)
        .delete(9999, INITIAL_ROW_VERSION)
        .await?;

    assert!(!deleted);

    Ok(())
}
