use super::*;

/// Tests creating a course.
///
/// Verifies that a new course starts at the initial row version and is returned
/// with its department name resolved.
///
/// Expected: Ok with the created course
#[tokio::test]
async fn creates_course_with_initial_row_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::DepartmentFactory::new(db)
        .name("Engineering")
        .build()
        .await?;

    let course = CourseRepository::new(db)
        .create(CourseValues {
            title: "Chemistry".to_string(),
            credits: 3,
            department_id: Some(department.id),
        })
        .await?;

    assert_eq!(course.title, "Chemistry");
    assert_eq!(course.credits, 3);
    assert_eq!(course.department_name.as_deref(), Some("Engineering"));
    assert_eq!(course.row_version, INITIAL_ROW_VERSION);

    Ok(())
}
