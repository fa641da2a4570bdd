use super::*;

/// Tests renaming a school.
///
/// Expected: Ok with the renamed school
#[tokio::test]
async fn renames_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let updated = SchoolRepository::new(db)
        .update(
            school.id,
            UpdateSchoolParam {
                name: "Renamed".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, school.id);
    assert_eq!(updated.name, "Renamed");

    let stored = entity::prelude::School::find_by_id(school.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Renamed");

    Ok(())
}

/// Tests updating a school that does not exist.
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

    let result = SchoolRepository::new(db)
        .update(
            999,
            UpdateSchoolParam {
                name: "Renamed".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
