use sqlx::SqlitePool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Creates a credential row with a bcrypt hash of the password. The
    /// plaintext is never stored and cannot be recovered from the hash.
    #[instrument(skip(db, dto))]
    pub async fn register_user(db: &SqlitePool, dto: RegisterRequest) -> Result<(), AppError> {
        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
            .bind(&dto.username)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::conflict("user already exists"));
        }

        let hashed_password = hash_password(&dto.password)?;

        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(&dto.username)
            .bind(&hashed_password)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    /// Verifies credentials and issues an access token. An unknown username
    /// and a wrong password produce the same error so callers cannot tell
    /// which part was wrong.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i64,
            password: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, password FROM users WHERE username = ?",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("invalid username or password"))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::unauthorized("invalid username or password"));
        }

        let token = create_access_token(user.id, &dto.username, jwt_config)?;

        Ok(LoginResponse {
            status: "success".to_string(),
            token,
            username: dto.username,
        })
    }
}
