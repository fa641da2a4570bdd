//! Domain & parameter models for student operations
//!
//! A student is always loaded together with its school so the school name can be
//! flattened into the API representation. On the way back into storage only the school ID
//! is kept.

use crate::{
    model::{
        grade::Grade,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        util::validate::{require, require_text},
    },
};

/// The student domain model
///
/// Carries the denormalized name of the school the student is enrolled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub student_name: String,
    pub grade: Grade,
    pub roll_number: String,
    pub mobile_number: String,
    pub guardian_name: String,
    pub school_id: i32,
    pub school_name: String,
}

impl Student {
    /// Converts a student entity and its school into the student domain model
    ///
    /// # Arguments
    /// - `entity` - The student row
    /// - `school` - The school row referenced by `entity.school_id`
    ///
    /// # Returns
    /// - `Ok(Student)` - The converted domain model
    /// - `Err(AppError::InternalErr(InvalidStoredGrade))` - The stored grade is not `G1`..`G10`
    pub fn from_entity(
        entity: entity::student::Model,
        school: entity::school::Model,
    ) -> Result<Self, AppError> {
        let grade = entity
            .grade
            .parse::<Grade>()
            .map_err(|source| InternalError::InvalidStoredGrade {
                student_id: entity.id,
                value: entity.grade.clone(),
                source,
            })?;

        Ok(Self {
            id: entity.id,
            student_name: entity.student_name,
            grade,
            roll_number: entity.roll_number,
            mobile_number: entity.mobile_number,
            guardian_name: entity.guardian_name,
            school_id: school.id,
            school_name: school.name,
        })
    }

    /// Converts a student row that was loaded with an optional related school
    ///
    /// # Returns
    /// - `Ok(Student)` - The converted domain model
    /// - `Err(AppError::InternalErr(MissingSchool))` - The related school was not loaded
    /// - `Err(AppError::InternalErr(InvalidStoredGrade))` - The stored grade is invalid
    pub fn from_related(
        entity: entity::student::Model,
        school: Option<entity::school::Model>,
    ) -> Result<Self, AppError> {
        let school = school.ok_or(InternalError::MissingSchool {
            student_id: entity.id,
            school_id: entity.school_id,
        })?;

        Self::from_entity(entity, school)
    }

    /// Rebuilds the domain model from its API representation
    pub fn from_dto(dto: StudentDto) -> Self {
        Self {
            id: dto.id,
            student_name: dto.student_name,
            grade: dto.grade,
            roll_number: dto.roll_number,
            mobile_number: dto.mobile_number,
            guardian_name: dto.guardian_name,
            school_id: dto.school_id,
            school_name: dto.school_name,
        }
    }

    /// Converts the student domain model into a DTO for the API
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            student_name: self.student_name,
            grade: self.grade,
            roll_number: self.roll_number,
            mobile_number: self.mobile_number,
            school_id: self.school_id,
            school_name: self.school_name,
            guardian_name: self.guardian_name,
        }
    }

    /// Converts the student domain model into its persisted shape, keeping the school by ID
    pub fn into_entity(self) -> entity::student::Model {
        entity::student::Model {
            id: self.id,
            student_name: self.student_name,
            grade: self.grade.to_string(),
            roll_number: self.roll_number,
            mobile_number: self.mobile_number,
            guardian_name: self.guardian_name,
            school_id: self.school_id,
        }
    }
}

/// Parameters for enrolling a new student
///
/// The roll number is not part of the parameters, it is generated when the student is
/// created.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub student_name: String,
    pub grade: Grade,
    pub mobile_number: String,
    pub guardian_name: String,
    pub school_id: i32,
}

/// Parameters for updating an existing student
///
/// The guardian name and roll number are fixed at creation.
#[derive(Debug, Clone)]
pub struct UpdateStudentParam {
    pub student_name: String,
    pub grade: Grade,
    pub mobile_number: String,
    pub school_id: i32,
}

impl TryFrom<CreateStudentDto> for CreateStudentParam {
    type Error = AppError;

    fn try_from(dto: CreateStudentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            student_name: require_text("studentName", dto.student_name)?,
            grade: require("grade", dto.grade)?,
            mobile_number: require_text("mobileNumber", dto.mobile_number)?,
            guardian_name: require_text("guardianName", dto.guardian_name)?,
            school_id: require("schoolId", dto.school_id)?,
        })
    }
}

impl TryFrom<UpdateStudentDto> for UpdateStudentParam {
    type Error = AppError;

    fn try_from(dto: UpdateStudentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            student_name: require_text("studentName", dto.student_name)?,
            grade: require("grade", dto.grade)?,
            mobile_number: require_text("mobileNumber", dto.mobile_number)?,
            school_id: require("schoolId", dto.school_id)?,
        })
    }
}
