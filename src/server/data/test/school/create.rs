use super::*;

/// Tests creating a school.
///
/// Verifies that the database assigns an ID and the row is persisted with the given name.
///
/// Expected: Ok with the created school
#[tokio::test]
async fn creates_school_with_generated_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = SchoolRepository::new(db)
        .create(CreateSchoolParam {
            name: "Skiply".to_string(),
        })
        .await?;

    assert!(school.id > 0);
    assert_eq!(school.name, "Skiply");

    let stored = entity::prelude::School::find_by_id(school.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Skiply");

    Ok(())
}
