use super::*;

/// Tests finding an existing school.
///
/// Expected: Ok(Some(School))
#[tokio::test]
async fn finds_existing_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let found = SchoolRepository::new(db).find_by_id(school.id).await?;

    let found = found.unwrap();
    assert_eq!(found.id, school.id);
    assert_eq!(found.name, school.name);

    Ok(())
}

/// Tests finding a school that does not exist.
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

    let found = SchoolRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
