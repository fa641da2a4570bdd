use super::*;

/// Tests creating a student.
///
/// Verifies the row stores the canonical grade and the given roll number, and the
/// returned model carries the school name.
///
/// Expected: Ok with the created student
#[tokio::test]
async fn creates_student() -> Result<(), AppError> {
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

    let student = StudentRepository::new(db)
        .create(
            CreateStudentParam {
                grade: Grade::G10,
                ..create_param(school.id)
            },
            "2012".to_string(),
        )
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.roll_number, "2012");
    assert_eq!(student.school_name, "Skiply");
    assert_eq!(student.guardian_name, "Ali");

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.grade, "G10");
    assert_eq!(stored.school_id, school.id);

    Ok(())
}

/// Tests that the foreign key rejects an unknown school.
///
/// Expected: Err(AppError::DbErr) and no row written
#[tokio::test]
async fn fails_for_unknown_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .create(create_param(999), "2012".to_string())
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    let rows = entity::prelude::Student::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}
