use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{CreateStudentDto, Student, StudentFilters, UpdateStudentDto};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool, filters: StudentFilters) -> Result<Vec<Student>, AppError> {
        let year_level = filters.year_level();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, student_name, course, year_level, email FROM students WHERE 1 = 1",
        );

        if let Some(name) = filters.student_name.filter(|v| !v.is_empty()) {
            builder.push(" AND student_name LIKE ");
            builder.push_bind(format!("%{name}%"));
        }
        if let Some(course) = filters.course.filter(|v| !v.is_empty()) {
            builder.push(" AND course LIKE ");
            builder.push_bind(format!("%{course}%"));
        }
        if let Some(year_level) = year_level {
            builder.push(" AND year_level = ");
            builder.push_bind(year_level);
        }
        if let Some(email) = filters.email.filter(|v| !v.is_empty()) {
            builder.push(" AND email LIKE ");
            builder.push_bind(format!("%{email}%"));
        }

        let students = builder
            .build_query_as::<Student>()
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &SqlitePool, id: i64) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, student_name, course, year_level, email FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("student not found"))
    }

    /// Inserts a row and returns the generated id. All-or-nothing: a failed
    /// insert leaves no partial state behind.
    #[instrument(skip(db, dto))]
    pub async fn create(db: &SqlitePool, dto: CreateStudentDto) -> Result<i64, AppError> {
        if !dto.email.contains('@') {
            return Err(AppError::validation("invalid email format"));
        }

        let result = sqlx::query(
            "INSERT INTO students (student_name, course, year_level, email) VALUES (?, ?, ?, ?)",
        )
        .bind(&dto.student_name)
        .bind(&dto.course)
        .bind(dto.year_level)
        .bind(&dto.email)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(result.last_insert_rowid())
    }

    /// Applies the provided fields as a single atomic UPDATE. The existence
    /// check runs first so an unknown id yields 404 before any validation.
    #[instrument(skip(db, dto))]
    pub async fn update(db: &SqlitePool, id: i64, dto: UpdateStudentDto) -> Result<(), AppError> {
        Self::get_by_id(db, id).await?;

        if dto.is_empty() {
            return Err(AppError::validation("no fields to update"));
        }

        if let Some(email) = &dto.email {
            if !email.contains('@') {
                return Err(AppError::validation("invalid email format"));
            }
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE students SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(student_name) = dto.student_name {
                fields.push("student_name = ");
                fields.push_bind_unseparated(student_name);
            }
            if let Some(course) = dto.course {
                fields.push("course = ");
                fields.push_bind_unseparated(course);
            }
            if let Some(year_level) = dto.year_level {
                fields.push("year_level = ");
                fields.push_bind_unseparated(year_level);
            }
            if let Some(email) = dto.email {
                fields.push("email = ");
                fields.push_bind_unseparated(email);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        builder
            .build()
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        // Deleting an already-deleted id is a 404, not a no-op.
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("student not found"));
        }

        Ok(())
    }
}
