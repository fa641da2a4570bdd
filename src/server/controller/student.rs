use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        controller::extract::ApiJson,
        error::AppError,
        model::student::{CreateStudentParam, UpdateStudentParam},
        service::student::StudentService,
        state::AppState,
    },
};

pub static STUDENT_TAG: &str = "student";

#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).list().await?;

    let dtos: Vec<StudentDto> = students
        .into_iter()
        .map(|student| student.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateStudentParam::try_from(payload)?;

    let student = StudentService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student or school not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateStudentParam::try_from(payload)?;

    let student = StudentService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Looks up the first student holding a roll number.
///
/// A `null` body means the lookup degraded (retries exhausted or circuit open), not that
/// the roll number is unknown; an unknown roll number answers 404.
#[utoipa::path(
    get,
    path = "/students/rollNo/{rollNo}",
    tag = STUDENT_TAG,
    params(
        ("rollNo" = String, Path, description = "Four digit roll number")
    ),
    responses(
        (status = 200, description = "Matching student, or null when the lookup is degraded", body = StudentDto),
        (status = 404, description = "No student has this roll number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_roll_number(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db)
        .lookup_by_roll_number(&state.lookup_resilience, roll_number.clone())
        .await?;

    if student.is_none() {
        tracing::warn!(
            "Roll number lookup for {} degraded, answering with empty result",
            roll_number
        );
    }

    Ok((StatusCode::OK, Json(student.map(|s| s.into_dto()))))
}
