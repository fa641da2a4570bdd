use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchoolDto {
    #[serde(rename = "schoolId")]
    pub id: i32,
    #[serde(rename = "schoolName")]
    pub name: String,
}

/// Body of `POST /schools`. A `schoolId` sent by the client is ignored.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateSchoolDto {
    #[serde(rename = "schoolName", default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateSchoolDto {
    #[serde(rename = "schoolName", default)]
    pub name: String,
}
