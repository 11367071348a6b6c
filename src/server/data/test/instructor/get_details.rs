use super::*;

/// Tests loading an instructor with the courses they teach.
///
/// Expected: Ok(Some) with the assigned course and its department name
#[tokio::test]
async fn loads_assigned_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, department, course) = factory::helpers::create_assigned_course(db).await?;
    factory::create_office_assignment(db, instructor.id, "Smith 17").await?;
    // Not taught by this instructor.
    factory::create_course(db, Some(department.id)).await?;

    let details = InstructorRepository::new(db)
        .get_details(instructor.id)
        .await?
        .unwrap();

    assert_eq!(details.instructor.id, instructor.id);
    assert_eq!(details.instructor.office_location.as_deref(), Some("Smith 17"));
    assert_eq!(details.courses.len(), 1);
    assert_eq!(details.courses[0].id, course.id);
    assert_eq!(
        details.courses[0].department_name.as_deref(),
        Some(department.name.as_str())
    );

    Ok(())
}

/// Tests loading details of an unknown instructor.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let details = InstructorRepository::new(db).get_details(9999).await?;

    assert!(details.is_none());

    Ok(())
}
