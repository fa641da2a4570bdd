use super::*;

/// Tests deleting a student.
///
/// Expected: Ok and the row is gone
#[tokio::test]
async fn deletes_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_school, student) = factory::helpers::create_student_with_school(db).await?;

    StudentService::new(db).delete(student.id).await?;

    let check = entity::prelude::Student::find_by_id(student.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Err(AppError::NotFound) and other students untouched
#[tokio::test]
async fn fails_with_not_found_for_missing_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_school, student) = factory::helpers::create_student_with_school(db).await?;

    let result = StudentService::new(db).delete(student.id + 100).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let rows = entity::prelude::Student::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
