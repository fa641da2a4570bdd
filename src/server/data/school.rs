//! School data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::school::{CreateSchoolParam, School, UpdateSchoolParam},
};

/// Repository providing database operations for schools.
pub struct SchoolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolRepository<'a> {
    /// Creates a new SchoolRepository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every school ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<School>)` - All schools, empty if none exist
    /// - `Err(AppError::DbErr)` - Database error during select
    pub async fn get_all(&self) -> Result<Vec<School>, AppError> {
        let schools = entity::prelude::School::find()
            .order_by_asc(entity::school::Column::Id)
            .all(self.db)
            .await?;

        Ok(schools.into_iter().map(School::from_entity).collect())
    }

    /// Finds a school by ID
    ///
    /// # Returns
    /// - `Ok(Some(School))` - The school if found
    /// - `Ok(None)` - No school has this ID
    /// - `Err(AppError::DbErr)` - Database error during select
    pub async fn find_by_id(&self, id: i32) -> Result<Option<School>, AppError> {
        let school = entity::prelude::School::find_by_id(id).one(self.db).await?;

        Ok(school.map(School::from_entity))
    }

    /// Inserts a new school
    ///
    /// # Returns
    /// - `Ok(School)` - The created school with its generated ID
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSchoolParam) -> Result<School, AppError> {
        let school = entity::school::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(School::from_entity(school))
    }

    /// Renames an existing school
    ///
    /// # Arguments
    /// - `id` - ID of the school to update
    /// - `param` - The new school values
    ///
    /// # Returns
    /// - `Ok(School)` - The updated school
    /// - `Err(AppError::DbErr)` - Database error, including `RecordNotUpdated` if the school
    ///   does not exist
    pub async fn update(&self, id: i32, param: UpdateSchoolParam) -> Result<School, AppError> {
        let school = entity::school::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
        }
        .update(self.db)
        .await?;

        Ok(School::from_entity(school))
    }

    /// Deletes the school with the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No school had this ID
    /// - `Err(AppError::DbErr)` - Database error, including a foreign key violation when
    ///   students still reference the school
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::School::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the students enrolled in a school
    pub async fn count_students(&self, id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::SchoolId.eq(id))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
