use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{CreateGradeDto, Grade, GradeFilters, UpdateGradeDto};

const GRADE_COLUMNS: &str =
    "id, student_id, student_name, course_code, course_name, grade, semester, school_year";

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool, filters: GradeFilters) -> Result<Vec<Grade>, AppError> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {GRADE_COLUMNS} FROM grades WHERE 1 = 1"));

        if let Some(name) = filters.student_name.filter(|v| !v.is_empty()) {
            builder.push(" AND student_name LIKE ");
            builder.push_bind(format!("%{name}%"));
        }
        if let Some(course_name) = filters.course_name.filter(|v| !v.is_empty()) {
            builder.push(" AND course_name LIKE ");
            builder.push_bind(format!("%{course_name}%"));
        }
        if let Some(grade) = filters.grade.filter(|v| !v.is_empty()) {
            builder.push(" AND grade = ");
            builder.push_bind(grade);
        }
        if let Some(semester) = filters.semester.filter(|v| !v.is_empty()) {
            builder.push(" AND semester LIKE ");
            builder.push_bind(format!("%{semester}%"));
        }

        let grades = builder
            .build_query_as::<Grade>()
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(grades)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &SqlitePool, id: i64) -> Result<Grade, AppError> {
        sqlx::query_as::<_, Grade>(&format!("SELECT {GRADE_COLUMNS} FROM grades WHERE id = ?"))
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found("grade not found"))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &SqlitePool, dto: CreateGradeDto) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO grades (student_id, student_name, course_code, course_name, grade, semester, school_year) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(dto.student_id)
        .bind(&dto.student_name)
        .bind(&dto.course_code)
        .bind(&dto.course_name)
        .bind(&dto.grade)
        .bind(&dto.semester)
        .bind(&dto.school_year)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &SqlitePool, id: i64, dto: UpdateGradeDto) -> Result<(), AppError> {
        Self::get_by_id(db, id).await?;

        if dto.is_empty() {
            return Err(AppError::validation("no fields to update"));
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE grades SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(student_name) = dto.student_name {
                fields.push("student_name = ");
                fields.push_bind_unseparated(student_name);
            }
            if let Some(course_code) = dto.course_code {
                fields.push("course_code = ");
                fields.push_bind_unseparated(course_code);
            }
            if let Some(course_name) = dto.course_name {
                fields.push("course_name = ");
                fields.push_bind_unseparated(course_name);
            }
            if let Some(grade) = dto.grade {
                fields.push("grade = ");
                fields.push_bind_unseparated(grade);
            }
            if let Some(semester) = dto.semester {
                fields.push("semester = ");
                fields.push_bind_unseparated(semester);
            }
            if let Some(school_year) = dto.school_year {
                fields.push("school_year = ");
                fields.push_bind_unseparated(school_year);
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
        let result = sqlx::query("DELETE FROM grades WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("grade not found"));
        }

        Ok(())
    }
}
