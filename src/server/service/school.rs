use sea_orm::DatabaseConnection;

use crate::server::{
    data::school::SchoolRepository,
    error::AppError,
    model::school::{CreateSchoolParam, School, UpdateSchoolParam},
};

pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every school
    pub async fn list(&self) -> Result<Vec<School>, AppError> {
        SchoolRepository::new(self.db).get_all().await
    }

    /// Gets a school by ID
    ///
    /// A missing school is not an error here; callers decide how to report it.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<School>, AppError> {
        SchoolRepository::new(self.db).find_by_id(id).await
    }

    /// Creates a new school
    pub async fn create(&self, param: CreateSchoolParam) -> Result<School, AppError> {
        let school = SchoolRepository::new(self.db).create(param).await?;

        tracing::info!("Created school {} ({})", school.id, school.name);

        Ok(school)
    }

    /// Renames an existing school
    ///
    /// # Returns
    /// - `Ok(School)` - The updated school
    /// - `Err(AppError::NotFound)` - No school has this ID, nothing was written
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, param: UpdateSchoolParam) -> Result<School, AppError> {
        let repo = SchoolRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(school_not_found(id));
        }

        repo.update(id, param).await
    }

    /// Deletes a school without students
    ///
    /// # Returns
    /// - `Ok(())` - The school was deleted
    /// - `Err(AppError::NotFound)` - No school has this ID, no delete was issued
    /// - `Err(AppError::BadRequest)` - Students are still enrolled in the school
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SchoolRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(school_not_found(id));
        }

        let students = repo.count_students(id).await?;
        if students > 0 {
            return Err(AppError::BadRequest(format!(
                "School {} still has {} students",
                id, students
            )));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted school {}", id);

        Ok(())
    }
}

pub(crate) fn school_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("School not found with id: {}", id))
}
