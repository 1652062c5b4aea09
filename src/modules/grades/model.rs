use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A grade record. `student_id` is a loose reference to a student row with no
/// referential integrity behind it; the grade value is stored as text so both
/// numeric ("1.25") and letter ("A") grades fit.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
    pub grade: String,
    pub semester: String,
    pub school_year: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGradeDto {
    pub student_id: i64,
    #[validate(length(min = 1, message = "missing required field: student_name"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "missing required field: course_code"))]
    pub course_code: String,
    #[validate(length(min = 1, message = "missing required field: course_name"))]
    pub course_name: String,
    #[validate(length(min = 1, message = "missing required field: grade"))]
    pub grade: String,
    #[validate(length(min = 1, message = "missing required field: semester"))]
    pub semester: String,
    #[validate(length(min = 1, message = "missing required field: school_year"))]
    pub school_year: String,
}

/// Everything except `student_id` is mutable after creation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGradeDto {
    pub student_name: Option<String>,
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub grade: Option<String>,
    pub semester: Option<String>,
    pub school_year: Option<String>,
}

impl UpdateGradeDto {
    pub fn is_empty(&self) -> bool {
        self.student_name.is_none()
            && self.course_code.is_none()
            && self.course_name.is_none()
            && self.grade.is_none()
            && self.semester.is_none()
            && self.school_year.is_none()
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GradeFilters {
    pub student_name: Option<String>,
    pub course_name: Option<String>,
    /// Exact match, unlike the substring filters.
    pub grade: Option<String>,
    pub semester: Option<String>,
}
