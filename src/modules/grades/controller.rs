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

use super::model::{CreateGradeDto, Grade, GradeFilters, UpdateGradeDto};
use super::service::GradeService;

#[utoipa::path(
    get,
    path = "/api/grades",
    params(GradeFilters),
    responses(
        (status = 200, description = "List of grades, filtered", body = [Grade]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_grades(
    State(state): State<AppState>,
    Query(filters): Query<GradeFilters>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let grades = GradeService::list(&state.db, filters)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(StatusCode::OK, json!(grades)))
}

#[utoipa::path(
    get,
    path = "/api/grade/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    responses(
        (status = 200, description = "Grade record", body = Grade),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_grade(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let grade = GradeService::get_by_id(&state.db, id)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(StatusCode::OK, json!(grade)))
}

#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade created", body = SuccessResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, dto))]
pub async fn create_grade(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    format: ResponseFormat,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<Response, AppError> {
    let id = GradeService::create(&state.db, dto)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::CREATED,
        json!({
            "success": true,
            "message": format!("grade {id} created successfully")
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/grade/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated", body = SuccessResponse),
        (status = 400, description = "No fields to update", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, dto))]
pub async fn update_grade(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
    format: ResponseFormat,
    ValidatedJson(dto): ValidatedJson<UpdateGradeDto>,
) -> Result<Response, AppError> {
    GradeService::update(&state.db, id, dto)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::OK,
        json!({
            "success": true,
            "message": format!("grade {id} updated successfully")
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/grade/{id}",
    params(("id" = i64, Path, description = "Grade ID")),
    responses(
        (status = 200, description = "Grade deleted", body = SuccessResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn delete_grade(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    GradeService::delete(&state.db, id)
        .await
        .map_err(|err| err.with_format(format))?;
    Ok(format.render(
        StatusCode::OK,
        json!({
            "success": true,
            "message": format!("grade {id} deleted successfully")
        }),
    ))
}
