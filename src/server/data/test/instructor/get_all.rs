use super::*;

/// Tests listing instructors.
///
/// Verifies that instructors are ordered by last name and carry their office location.
///
/// Expected: Ok with instructors sorted by last name
#[tokio::test]
async fn lists_instructors_by_last_name_with_office() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zheng = factory::instructor::InstructorFactory::new(db)
        .last_name("Zheng")
        .build()
        .await?;
    let harui = factory::instructor::InstructorFactory::new(db)
        .last_name("Harui")
        .build()
        .await?;
    factory::create_office_assignment(db, harui.id, "Gowan 27").await?;

    let instructors = InstructorRepository::new(db).get_all().await?;

    assert_eq!(instructors.len(), 2);
    assert_eq!(instructors[0].id, harui.id);
    assert_eq!(instructors[0].office_location.as_deref(), Some("Gowan 27"));
    assert_eq!(instructors[1].id, zheng.id);
    assert!(instructors[1].office_location.is_none());

    Ok(())
}
