use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::modules::grades::model::{CreateGradeDto, Grade, UpdateGradeDto};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::modules::teachers::model::{CreateTeacherDto, Teacher, UpdateTeacherDto};
use crate::utils::errors::{ErrorResponse, SuccessResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::grades::controller::get_grades,
        crate::modules::grades::controller::get_grade,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::update_grade,
        crate::modules::grades::controller::delete_grade,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            Grade,
            CreateGradeDto,
            UpdateGradeDto,
            ErrorResponse,
            SuccessResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and token issuance"),
        (name = "Students", description = "Student records"),
        (name = "Teachers", description = "Teacher records"),
        (name = "Grades", description = "Grade records")
    ),
    info(
        title = "Gradebook API",
        description = "CRUD service for student, teacher, and grade records. \
            Reads are public; writes require a bearer token from /auth/login. \
            Append format=xml to any resource endpoint for an XML response."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
