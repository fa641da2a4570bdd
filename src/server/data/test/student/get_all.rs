use super::*;

/// Tests listing students with their school names.
///
/// Expected: Ok with every student and the name of its school
#[tokio::test]
async fn returns_students_with_school_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let skiply = factory::school::SchoolFactory::new(db)
        .name("Skiply")
        .build()
        .await?;
    let other = factory::school::SchoolFactory::new(db)
        .name("Other")
        .build()
        .await?;
    let first = factory::create_student(db, skiply.id).await?;
    let second = factory::create_student(db, other.id).await?;

    let students = StudentRepository::new(db).get_all().await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, first.id);
    assert_eq!(students[0].school_name, "Skiply");
    assert_eq!(students[1].id, second.id);
    assert_eq!(students[1].school_name, "Other");

    Ok(())
}

/// Tests listing students from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let students = StudentRepository::new(db).get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

/// Tests that a manually corrupted grade surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr(InvalidStoredGrade))
#[tokio::test]
async fn fails_on_corrupt_stored_grade() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    factory::student::StudentFactory::new(db, school.id)
        .grade("Senior")
        .build()
        .await?;

    let result = StudentRepository::new(db).get_all().await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::InvalidStoredGrade { .. }))
    ));

    Ok(())
}
