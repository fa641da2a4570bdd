use super::*;

/// Tests that a shared roll number resolves to the student with the lowest ID.
///
/// Expected: Ok(Some(Student)) for the first student created with the number
#[tokio::test]
async fn returns_first_match_for_duplicate_roll_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let first = factory::student::StudentFactory::new(db, school.id)
        .roll_number("4242")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, school.id)
        .roll_number("4242")
        .build()
        .await?;

    let found = StudentRepository::new(db)
        .find_first_by_roll_number("4242")
        .await?
        .unwrap();

    assert_eq!(found.id, first.id);

    Ok(())
}

/// Tests looking up a roll number nobody holds.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_roll_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    factory::student::StudentFactory::new(db, school.id)
        .roll_number("1111")
        .build()
        .await?;

    let found = StudentRepository::new(db)
        .find_first_by_roll_number("2222")
        .await?;

    assert!(found.is_none());

    Ok(())
}
