//! School factory for creating test school rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools with customizable fields.
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory named `"School {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("School {}", next_id()),
        }
    }

    /// Sets the school name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Inserts the school.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created school
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        entity::school::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school with default values.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db).build().await
}
