use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{school, student},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Registry", description = "Schools, students and roll number lookup"),
    tags(
        (name = "school", description = "School management"),
        (name = "student", description = "Student management and roll number lookup"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Serves the API routes, `/health` and the generated OpenAPI document at
/// `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router
        .route("/health", get(health))
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(school::get_all_schools, school::create_school))
        .routes(routes!(
            school::get_school_by_id,
            school::update_school,
            school::delete_school
        ))
        .routes(routes!(student::get_all_students, student::create_student))
        .routes(routes!(
            student::get_student_by_id,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(student::get_student_by_roll_number))
}

async fn health() -> &'static str {
    "OK"
}
