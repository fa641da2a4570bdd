use super::*;

/// Tests finding a student by ID.
///
/// Expected: Ok(Some(Student)) with the stored values and school name
#[tokio::test]
async fn finds_student_with_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::school::SchoolFactory::new(db)
        .name("Skiply")
        .build()
        .await?;
    let student = factory::student::StudentFactory::new(db, school.id)
        .student_name("John")
        .grade("G7")
        .build()
        .await?;

    let found = StudentRepository::new(db).find_by_id(student.id).await?.unwrap();

    assert_eq!(found.student_name, "John");
    assert_eq!(found.grade, Grade::G7);
    assert_eq!(found.roll_number, student.roll_number);
    assert_eq!(found.school_id, school.id);
    assert_eq!(found.school_name, "Skiply");

    Ok(())
}

/// Tests finding a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = StudentRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
