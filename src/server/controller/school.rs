use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        school::{CreateSchoolDto, SchoolDto, UpdateSchoolDto},
    },
    server::{
        controller::extract::ApiJson,
        error::AppError,
        model::school::{CreateSchoolParam, UpdateSchoolParam},
        service::school::{school_not_found, SchoolService},
        state::AppState,
    },
};

pub static SCHOOL_TAG: &str = "school";

#[utoipa::path(
    get,
    path = "/schools",
    tag = SCHOOL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved schools", body = Vec<SchoolDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_schools(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let schools = SchoolService::new(&state.db).list().await?;

    let dtos: Vec<SchoolDto> = schools.into_iter().map(|school| school.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved school", body = SchoolDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| school_not_found(id))?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

#[utoipa::path(
    post,
    path = "/schools",
    tag = SCHOOL_TAG,
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "Successfully created school", body = SchoolDto),
        (status = 400, description = "Invalid school data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_school(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateSchoolParam::try_from(payload)?;

    let school = SchoolService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(school.into_dto())))
}

#[utoipa::path(
    put,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "Successfully updated school", body = SchoolDto),
        (status = 400, description = "Invalid school data", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateSchoolParam::try_from(payload)?;

    let school = SchoolService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted school"),
        (status = 400, description = "School still has students", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SchoolService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
