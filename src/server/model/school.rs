//! Domain & parameter models for school operations

use crate::{
    model::school::{CreateSchoolDto, SchoolDto, UpdateSchoolDto},
    server::{error::AppError, util::validate::require_text},
};

/// The school domain model
#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub id: i32,
    pub name: String,
}

impl School {
    /// Converts an entity model to the school domain model
    pub fn from_entity(entity: entity::school::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the school domain model into a DTO for the API
    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new school
#[derive(Debug, Clone)]
pub struct CreateSchoolParam {
    pub name: String,
}

/// Parameters for renaming an existing school
#[derive(Debug, Clone)]
pub struct UpdateSchoolParam {
    pub name: String,
}

impl TryFrom<CreateSchoolDto> for CreateSchoolParam {
    type Error = AppError;

    fn try_from(dto: CreateSchoolDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("schoolName", dto.name)?,
        })
    }
}

impl TryFrom<UpdateSchoolDto> for UpdateSchoolParam {
    type Error = AppError;

    fn try_from(dto: UpdateSchoolDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("schoolName", dto.name)?,
        })
    }
}
