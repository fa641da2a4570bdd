use sea_orm::DatabaseConnection;

use crate::server::{
    data::{school::SchoolRepository, student::StudentRepository},
    error::AppError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
    resilience::Resilience,
    service::school::school_not_found,
    util::roll_number::generate_roll_number,
};

pub mod lookup;

use self::lookup::RollNumberLookup;

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student with the name of their school
    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        StudentRepository::new(self.db).get_all().await
    }

    /// Gets a student by ID
    ///
    /// # Returns
    /// - `Ok(Student)` - The student
    /// - `Err(AppError::NotFound)` - No student has this ID
    pub async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| student_not_found(id))
    }

    /// Enrolls a new student with a freshly generated roll number
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(AppError::NotFound)` - The school does not exist, nothing was written
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        self.require_school(param.school_id).await?;

        let student = StudentRepository::new(self.db)
            .create(param, generate_roll_number())
            .await?;

        tracing::info!(
            "Created student {} with roll number {} in school {}",
            student.id,
            student.roll_number,
            student.school_id
        );

        Ok(student)
    }

    /// Updates name, grade, mobile number and school of a student
    ///
    /// The school is only resolved again when it changes.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(AppError::NotFound)` - The student or the new school does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, param: UpdateStudentParam) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(|| student_not_found(id))?;

        if existing.school_id != param.school_id {
            self.require_school(param.school_id).await?;

            tracing::debug!(
                "Moving student {} from school {} to school {}",
                id,
                existing.school_id,
                param.school_id
            );
        }

        repo.update(id, param).await
    }

    /// Deletes a student
    ///
    /// # Returns
    /// - `Ok(())` - The student was deleted
    /// - `Err(AppError::NotFound)` - No student has this ID, no delete was issued
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(student_not_found(id));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted student {}", id);

        Ok(())
    }

    /// Starts a roll number lookup on a background task
    ///
    /// The lookup runs through `resilience`: database faults are retried and, once retries
    /// are exhausted or the circuit is open, the lookup resolves to `Ok(None)`. A roll
    /// number nobody holds is reported as `Err(AppError::NotFound)` and is not retried.
    ///
    /// # Arguments
    /// - `resilience` - Retry policy and circuit breaker shared by all lookups
    /// - `roll_number` - The roll number to find
    ///
    /// # Returns
    /// - `RollNumberLookup` - Handle resolving to the first student with this roll number
    pub fn lookup_by_roll_number(
        &self,
        resilience: &Resilience,
        roll_number: String,
    ) -> RollNumberLookup {
        RollNumberLookup::spawn(self.db.clone(), resilience.clone(), roll_number)
    }

    async fn require_school(&self, school_id: i32) -> Result<(), AppError> {
        match SchoolRepository::new(self.db).find_by_id(school_id).await? {
            Some(_) => Ok(()),
            None => Err(school_not_found(school_id)),
        }
    }
}

fn student_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Student not found with id: {}", id))
}
