use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub student_name: String,
    pub course: String,
    pub year_level: i64,
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "missing required field: student_name"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "missing required field: course"))]
    pub course: String,
    pub year_level: i64,
    #[validate(length(min = 1, message = "missing required field: email"))]
    pub email: String,
}

/// Partial update: only the fields present in the payload are written.
/// Unknown keys are ignored by deserialization, never applied.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    pub student_name: Option<String>,
    pub course: Option<String>,
    pub year_level: Option<i64>,
    pub email: Option<String>,
}

impl UpdateStudentDto {
    pub fn is_empty(&self) -> bool {
        self.student_name.is_none()
            && self.course.is_none()
            && self.year_level.is_none()
            && self.email.is_none()
    }
}

/// List filters, AND-combined. String filters match substrings; `year_level`
/// matches exactly. Absent or empty values add no predicate.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentFilters {
    pub student_name: Option<String>,
    pub course: Option<String>,
    /// Kept as a string so `year_level=` behaves like an absent filter
    /// instead of a deserialization rejection.
    pub year_level: Option<String>,
    pub email: Option<String>,
}

impl StudentFilters {
    /// The `year_level` predicate value, if one was supplied. Empty or
    /// non-numeric values count as absent.
    pub fn year_level(&self) -> Option<i64> {
        self.year_level.as_deref().and_then(|v| v.parse().ok())
    }
}
