use super::*;

/// Tests deleting a school without students.
///
/// Expected: Ok and the school is gone
#[tokio::test]
async fn deletes_empty_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    SchoolService::new(db).delete(school.id).await?;

    let check = entity::prelude::School::find_by_id(school.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a school that does not exist.
///
/// Verifies a not-found error is returned and existing schools are untouched.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_for_unknown_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_school(db).await?;

    let result = SchoolService::new(db).delete(existing.id + 100).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let rows = entity::prelude::School::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests that a school with students is kept.
///
/// Expected: Err(AppError::BadRequest) naming the student count
#[tokio::test]
async fn rejects_school_with_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _student) = factory::helpers::create_student_with_school(db).await?;

    let result = SchoolService::new(db).delete(school.id).await;

    assert!(
        matches!(result, Err(AppError::BadRequest(ref msg)) if msg.contains("still has 1 students"))
    );
    let check = entity::prelude::School::find_by_id(school.id).one(db).await?;
    assert!(check.is_some());

    Ok(())
}
