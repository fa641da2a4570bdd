use super::*;

/// Tests updating the mutable fields of a student.
///
/// Verifies the roll number and guardian name are kept and the school can change.
///
/// Expected: Ok with the updated student
#[tokio::test]
async fn updates_mutable_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_school, student) = factory::helpers::create_student_with_school(db).await?;
    let new_school = factory::school::SchoolFactory::new(db)
        .name("New School")
        .build()
        .await?;

    let updated = StudentRepository::new(db)
        .update(
            student.id,
            UpdateStudentParam {
                student_name: "Jane".to_string(),
                grade: Grade::G5,
                mobile_number: "+19999999999".to_string(),
                school_id: new_school.id,
            },
        )
        .await?;

    assert_eq!(updated.id, student.id);
    assert_eq!(updated.student_name, "Jane");
    assert_eq!(updated.grade, Grade::G5);
    assert_eq!(updated.mobile_number, "+19999999999");
    assert_eq!(updated.school_id, new_school.id);
    assert_eq!(updated.school_name, "New School");
    assert_eq!(updated.roll_number, student.roll_number);
    assert_eq!(updated.guardian_name, student.guardian_name);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let result = StudentRepository::new(db)
        .update(
            999,
            UpdateStudentParam {
                student_name: "Jane".to_string(),
                grade: Grade::G5,
                mobile_number: "+19999999999".to_string(),
                school_id: school.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
