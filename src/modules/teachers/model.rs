use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Teacher {
    pub id: i64,
    pub teacher_name: String,
    pub department: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, message = "missing required field: teacher_name"))]
    pub teacher_name: String,
    #[validate(length(min = 1, message = "missing required field: department"))]
    pub department: String,
    #[validate(length(min = 1, message = "missing required field: email"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    pub teacher_name: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}

impl UpdateTeacherDto {
    pub fn is_empty(&self) -> bool {
        self.teacher_name.is_none() && self.department.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeacherFilters {
    pub teacher_name: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}
