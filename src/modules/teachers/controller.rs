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

use super::model::{CreateTeacherDto, Teacher, TeacherFilters, UpdateTeacherDto};
use super::service::TeacherService;

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(TeacherFilters),
    responses(
        (status = 200, description = "List of teachers, filtered", body = [Teacher]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    Query(filters): Query<TeacherFilters>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let teachers = TeacherService::list(&state.db, filters)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(StatusCode::OK, json!(teachers)))
}

#[utoipa::path(
    get,
    path = "/api/teacher/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher record", body = Teacher),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let teacher = TeacherService::get_by_id(&state.db, id)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(StatusCode::OK, json!(teacher)))
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = SuccessResponse),
        (status = 400, description = "Missing field or bad email", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    format: ResponseFormat,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<Response, AppError> {
    let id = TeacherService::create(&state.db, dto)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::CREATED,
        json!({
            "success": true,
            "message": format!("teacher {id} created successfully")
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/teacher/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = SuccessResponse),
        (status = 400, description = "No fields to update or bad email", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
    format: ResponseFormat,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Response, AppError> {
    TeacherService::update(&state.db, id, dto)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::OK,
        json!({
            "success": true,
            "message": format!("teacher {id} updated successfully")
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/teacher/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted", body = SuccessResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    TeacherService::delete(&state.db, id)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::OK,
        json!({
            "success": true,
            "message": format!("teacher {id} deleted successfully")
        }),
    ))
}
