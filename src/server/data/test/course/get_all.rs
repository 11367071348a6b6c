use super::*;

/// Tests listing courses with department names.
///
/// Verifies that courses come back ordered by ID and carry the name of their
/// department, or None when they have no department.
///
/// Expected: Ok with both courses in ID order
#[tokio::test]
async fn lists_courses_with_department_names() -> Result<(), DbErr> {
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
    let with_department = factory::create_course(db, Some(department.id)).await?;
    let without_department = factory::create_course(db, None).await?;

    let courses = CourseRepository::new(db).get_all().await?;

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id, with_department.id);
    assert_eq!(courses[0].department_name.as_deref(), Some("Mathematics"));
    assert_eq!(courses[1].id, without_department.id);
    assert!(courses[1].department_name.is_none());

    Ok(())
}

/// Tests counting enrollments for a single course.
///
/// Expected: Ok(2) for the enrolled course, Ok(0) for the other
#[tokio::test]
async fn counts_enrollments_per_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let enrolled = factory::create_course(db, None).await?;
    let empty = factory::create_course(db, None).await?;
    for _ in 0..2 {
        let student = factory::create_student(db).await?;
        factory::create_enrollment(db, enrolled.id, student.id).await?;
    }

    let repo = CourseRepository::new(db);

    assert_eq!(repo.count_enrollments(enrolled.id).await?, 2);
    assert_eq!(repo.count_enrollments(empty.id).await?, 0);

    Ok(())
}
