use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::grade::Grade;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(rename = "studentId")]
    pub id: i32,
    pub student_name: String,
    #[schema(value_type = String, example = "G1")]
    pub grade: Grade,
    pub roll_number: String,
    pub mobile_number: String,
    pub school_id: i32,
    pub school_name: String,
    pub guardian_name: String,
}

/// Body of `POST /students`.
///
/// `studentId`, `rollNumber` and `schoolName` are server-generated and ignored when sent.
/// Missing text fields default to empty so they are reported as mandatory rather than as a
/// JSON shape error.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "G1")]
    pub grade: Option<Grade>,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub guardian_name: String,
    #[serde(default)]
    pub school_id: Option<i32>,
}

/// Body of `PUT /students/{id}`. The guardian name cannot be changed after creation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "G1")]
    pub grade: Option<Grade>,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub school_id: Option<i32>,
}
