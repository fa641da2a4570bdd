use super::*;

/// Tests listing schools from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_without_schools() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schools = SchoolRepository::new(db).get_all().await?;

    assert!(schools.is_empty());

    Ok(())
}

/// Tests listing schools in insertion order.
///
/// Expected: Ok with every school, ordered by ID
#[tokio::test]
async fn returns_all_schools_ordered_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::school::SchoolFactory::new(db)
        .name("Skiply")
        .build()
        .await?;
    let second = factory::create_school(db).await?;

    let schools = SchoolRepository::new(db).get_all().await?;

    assert_eq!(schools.len(), 2);
    assert_eq!(schools[0].id, first.id);
    assert_eq!(schools[0].name, "Skiply");
    assert_eq!(schools[1].id, second.id);

    Ok(())
}
