//! Student data repository for database operations
//!
//! Every read joins the student's school so the returned domain model carries the school
//! name.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
};

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every student with their school, ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - All students, empty if none exist
    /// - `Err(AppError::DbErr)` - Database error during select
    /// - `Err(AppError::InternalErr)` - A stored row could not be converted
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let rows = entity::prelude::Student::find()
            .find_also_related(entity::prelude::School)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(student, school)| Student::from_related(student, school))
            .collect()
    }

    /// Finds a student by ID
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The student if found
    /// - `Ok(None)` - No student has this ID
    /// - `Err(AppError::DbErr)` - Database error during select
    /// - `Err(AppError::InternalErr)` - The stored row could not be converted
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let row = entity::prelude::Student::find_by_id(id)
            .find_also_related(entity::prelude::School)
            .one(self.db)
            .await?;

        row.map(|(student, school)| Student::from_related(student, school))
            .transpose()
    }

    /// Finds the student with the lowest ID holding a roll number
    ///
    /// Roll numbers are not unique, so later students sharing the number are ignored.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The first matching student
    /// - `Ok(None)` - No student has this roll number
    /// - `Err(AppError::DbErr)` - Database error during select
    pub async fn find_first_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Option<Student>, AppError> {
        let row = entity::prelude::Student::find()
            .filter(entity::student::Column::RollNumber.eq(roll_number))
            .order_by_asc(entity::student::Column::Id)
            .find_also_related(entity::prelude::School)
            .one(self.db)
            .await?;

        row.map(|(student, school)| Student::from_related(student, school))
            .transpose()
    }

    /// Inserts a new student
    ///
    /// # Arguments
    /// - `param` - Validated student values
    /// - `roll_number` - The generated roll number
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with its school
    /// - `Err(AppError::DbErr)` - Database error, including a foreign key violation when the
    ///   school does not exist
    pub async fn create(
        &self,
        param: CreateStudentParam,
        roll_number: String,
    ) -> Result<Student, AppError> {
        let student = entity::student::ActiveModel {
            student_name: ActiveValue::Set(param.student_name),
            grade: ActiveValue::Set(param.grade.to_string()),
            roll_number: ActiveValue::Set(roll_number),
            mobile_number: ActiveValue::Set(param.mobile_number),
            guardian_name: ActiveValue::Set(param.guardian_name),
            school_id: ActiveValue::Set(param.school_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_school(student).await
    }

    /// Updates the mutable fields of a student
    ///
    /// The roll number and guardian name are left untouched.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student with its (possibly new) school
    /// - `Err(AppError::DbErr)` - Database error, including `RecordNotUpdated` if the student
    ///   does not exist
    pub async fn update(&self, id: i32, param: UpdateStudentParam) -> Result<Student, AppError> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            student_name: ActiveValue::Set(param.student_name),
            grade: ActiveValue::Set(param.grade.to_string()),
            mobile_number: ActiveValue::Set(param.mobile_number),
            school_id: ActiveValue::Set(param.school_id),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.with_school(student).await
    }

    /// Deletes the student with the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No student had this ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_school(&self, student: entity::student::Model) -> Result<Student, AppError> {
        let school = entity::prelude::School::find_by_id(student.school_id)
            .one(self.db)
            .await?;

        Student::from_related(student, school)
    }
}
