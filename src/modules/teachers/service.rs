use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{CreateTeacherDto, Teacher, TeacherFilters, UpdateTeacherDto};

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db))]
    pub async fn list(db: &SqlitePool, filters: TeacherFilters) -> Result<Vec<Teacher>, AppError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, teacher_name, department, email FROM teachers WHERE 1 = 1",
        );

        if let Some(name) = filters.teacher_name.filter(|v| !v.is_empty()) {
            builder.push(" AND teacher_name LIKE ");
            builder.push_bind(format!("%{name}%"));
        }
        if let Some(department) = filters.department.filter(|v| !v.is_empty()) {
            builder.push(" AND department LIKE ");
            builder.push_bind(format!("%{department}%"));
        }
        if let Some(email) = filters.email.filter(|v| !v.is_empty()) {
            builder.push(" AND email LIKE ");
            builder.push_bind(format!("%{email}%"));
        }

        let teachers = builder
            .build_query_as::<Teacher>()
            .fetch_all(db)
            .await
            .map_err(AppError::database)?;

        Ok(teachers)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &SqlitePool, id: i64) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, teacher_name, department, email FROM teachers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("teacher not found"))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &SqlitePool, dto: CreateTeacherDto) -> Result<i64, AppError> {
        if !dto.email.contains('@') {
            return Err(AppError::validation("invalid email format"));
        }

        let result =
            sqlx::query("INSERT INTO teachers (teacher_name, department, email) VALUES (?, ?, ?)")
                .bind(&dto.teacher_name)
                .bind(&dto.department)
                .bind(&dto.email)
                .execute(db)
                .await
                .map_err(AppError::database)?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &SqlitePool, id: i64, dto: UpdateTeacherDto) -> Result<(), AppError> {
        Self::get_by_id(db, id).await?;

        if dto.is_empty() {
            return Err(AppError::validation("no fields to update"));
        }

        if let Some(email) = &dto.email {
            if !email.contains('@') {
                return Err(AppError::validation("invalid email format"));
            }
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE teachers SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(teacher_name) = dto.teacher_name {
                fields.push("teacher_name = ");
                fields.push_bind_unseparated(teacher_name);
            }
            if let Some(department) = dto.department {
                fields.push("department = ");
                fields.push_bind_unseparated(department);
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
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("teacher not found"));
        }

        Ok(())
    }
}
