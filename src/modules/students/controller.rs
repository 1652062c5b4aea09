use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde_json::json;
use tracing::instrument;

use crate::format::ResponseFormat;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse, SuccessResponse};
use crate::validator::ValidatedJson;

use super::model::{CreateStudentDto, Student, StudentFilters, UpdateStudentDto};
use super::service::StudentService;

#[utoipa::path(
    get,
    path = "/api/students",
    params(StudentFilters),
    responses(
        (status = 200, description = "List of students, filtered", body = [Student]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(filters): Query<StudentFilters>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let students = StudentService::list(&state.db, filters)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(StatusCode::OK, json!(students)))
}

#[utoipa::path(
    get,
    path = "/api/student/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student record", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let student = StudentService::get_by_id(&state.db, id)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(StatusCode::OK, json!(student)))
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = SuccessResponse),
        (status = 400, description = "Missing field or bad email", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    format: ResponseFormat,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<Response, AppError> {
    let id = StudentService::create(&state.db, dto)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::CREATED,
        json!({
            "success": true,
            "message": format!("student {id} created successfully")
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/student/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = SuccessResponse),
        (status = 400, description = "No fields to update or bad email", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
    format: ResponseFormat,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Response, AppError> {
    StudentService::update(&state.db, id, dto)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::OK,
        json!({
            "success": true,
            "message": format!("student {id} updated successfully")
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/student/{id}",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = SuccessResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    StudentService::delete(&state.db, id)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::OK,
        json!({
            "success": true,
            "message": format!("student {id} deleted successfully")
        }),
    ))
}
