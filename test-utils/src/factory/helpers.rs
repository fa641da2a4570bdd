//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a school and one student enrolled in it, both with default values.
///
/// # Returns
/// - `Ok((school, student))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_school(
    db: &DatabaseConnection,
) -> Result<(entity::school::Model, entity::student::Model), DbErr> {
    let school = crate::factory::school::create_school(db).await?;
    let student = crate::factory::student::create_student(db, school.id).await?;

    Ok((school, student))
}
