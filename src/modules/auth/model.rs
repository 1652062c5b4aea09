use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// JWT claims carried by access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified.
    pub sub: String,
    pub username: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "missing required field: username"))]
    pub username: String,
    #[validate(length(min = 1, message = "missing required field: password"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "missing required field: username"))]
    pub username: String,
    #[validate(length(min = 1, message = "missing required field: password"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}
