use super::*;

/// Tests renaming an existing school.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn renames_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let updated = SchoolService::new(db)
        .update(
            school.id,
            UpdateSchoolParam {
                name: "Renamed".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, school.id);
    assert_eq!(updated.name, "Renamed");

    Ok(())
}

/// Tests updating a school that does not exist.
///
/// Verifies a not-found error is returned and no row is written.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SchoolService::new(db)
        .update(
            42,
            UpdateSchoolParam {
                name: "Ghost".to_string(),
            },
        )
        .await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "School not found with id: 42")
    );
    let rows = entity::prelude::School::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}
