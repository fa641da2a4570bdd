use super::*;

/// Tests updating a student within the same school.
///
/// Expected: Ok with new name, grade and mobile number, guardian and roll number kept
#[tokio::test]
async fn updates_student_in_same_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, student) = factory::helpers::create_student_with_school(db).await?;

    let updated = StudentService::new(db)
        .update(student.id, update_param(school.id))
        .await?;

    assert_eq!(updated.student_name, "Jane");
    assert_eq!(updated.grade, Grade::G2);
    assert_eq!(updated.mobile_number, "+19999999999");
    assert_eq!(updated.guardian_name, student.guardian_name);
    assert_eq!(updated.roll_number, student.roll_number);

    Ok(())
}

/// Tests moving a student to another school.
///
/// Expected: Ok with the new school ID and name
#[tokio::test]
async fn moves_student_to_other_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_school, student) = factory::helpers::create_student_with_school(db).await?;
    let other = factory::school::SchoolFactory::new(db)
        .name("Other")
        .build()
        .await?;

    let updated = StudentService::new(db)
        .update(student.id, update_param(other.id))
        .await?;

    assert_eq!(updated.school_id, other.id);
    assert_eq!(updated.school_name, "Other");

    Ok(())
}

/// Tests moving a student to a school that does not exist.
///
/// Expected: Err(AppError::NotFound) and the student is unchanged
#[tokio::test]
async fn fails_when_new_school_is_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, student) = factory::helpers::create_student_with_school(db).await?;

    let result = StudentService::new(db)
        .update(student.id, update_param(school.id + 100))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.starts_with("School")));
    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, student);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_for_missing_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let result = StudentService::new(db)
        .update(42, update_param(school.id))
        .await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Student not found with id: 42")
    );

    Ok(())
}
