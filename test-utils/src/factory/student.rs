//! Student factory for creating test student rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db, school.id)
///     .student_name("John")
///     .grade("G4")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    school_id: i32,
    student_name: String,
    grade: String,
    roll_number: String,
    mobile_number: String,
    guardian_name: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_name: `"Student {n}"`
    /// - grade: `"G1"`
    /// - roll_number: a four digit value derived from the counter
    /// - mobile_number: `"+10000000000"`
    /// - guardian_name: `"Guardian {n}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `school_id` - School the student is enrolled in
    pub fn new(db: &'a DatabaseConnection, school_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            school_id,
            student_name: format!("Student {}", id),
            grade: "G1".to_string(),
            roll_number: (1000 + id % 9000).to_string(),
            mobile_number: "+10000000000".to_string(),
            guardian_name: format!("Guardian {}", id),
        }
    }

    /// Sets the student name.
    pub fn student_name(mut self, student_name: impl Into<String>) -> Self {
        self.student_name = student_name.into();
        self
    }

    /// Sets the stored grade code.
    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    /// Sets the roll number.
    pub fn roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = roll_number.into();
        self
    }

    /// Sets the mobile number.
    pub fn mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = mobile_number.into();
        self
    }

    /// Sets the guardian name.
    pub fn guardian_name(mut self, guardian_name: impl Into<String>) -> Self {
        self.guardian_name = guardian_name.into();
        self
    }

    /// Inserts the student.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created student
    /// - `Err(DbErr)` - Database error during insert, including a missing school
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            student_name: ActiveValue::Set(self.student_name),
            grade: ActiveValue::Set(self.grade),
            roll_number: ActiveValue::Set(self.roll_number),
            mobile_number: ActiveValue::Set(self.mobile_number),
            guardian_name: ActiveValue::Set(self.guardian_name),
            school_id: ActiveValue::Set(self.school_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given school.
pub async fn create_student(
    db: &DatabaseConnection,
    school_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, school_id).build().await
}
