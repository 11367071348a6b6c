use super::*;

/// Tests deleting an instructor.
///
/// Verifies that the office assignment and course assignments are removed, the
/// department they administered is kept with no administrator, and the course stays.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_instructor_and_detaches_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, department, course) = factory::helpers::create_assigned_course(db).await?;
    factory::create_office_assignment(db, instructor.id, "Thompson 304").await?;

    let deleted = InstructorRepository::new(db).delete(instructor.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Instructor::find_by_id(instructor.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::OfficeAssignment::find_by_id(instructor.id)
        .one(db)
        .await?
        .is_none());

    let assignments = entity::prelude::CourseAssignment::find()
        .filter(entity::course_assignment::Column::InstructorId.eq(instructor.id))
        .count(db)
        .await?;
    assert_eq!(assignments, 0);

    let department = entity::prelude::Department::find_by_id(department.id)
        .one(db)
        .await?
        .unwrap();
    assert!(department.instructor_id.is_none());
    assert!(entity::prelude::Course::find_by_id(course.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an unknown instructor.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = InstructorRepository::new(db).delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
