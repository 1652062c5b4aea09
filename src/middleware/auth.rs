use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::format::ResponseFormat;
use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and exposes the caller's claims.
///
/// Placed on every state-mutating handler; reads stay public. The check is
/// stateless: a pure function of the token, the server secret, and the clock.
/// Because extractors run before the request body is read, a missing or bad
/// token rejects the request before any business logic executes.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The authenticated user's id from the token subject.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("invalid user id in token"))
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Rejections fire before the handler runs, so the representation
        // selector has to be read here for the error body to honor it.
        let format = ResponseFormat::from_uri(&parts.uri);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized("missing authorization header").with_format(format)
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                AppError::unauthorized("invalid authorization header format").with_format(format)
            })?;

        let claims = verify_token(token, &state.jwt_config)
            .map_err(|err| err.with_format(format))?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_for(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            username: "alice".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn user_id_parses_numeric_subject() {
        let auth_user = AuthUser(claims_for("42"));
        assert_eq!(auth_user.user_id().unwrap(), 42);
    }

    #[test]
    fn user_id_rejects_non_numeric_subject() {
        let auth_user = AuthUser(claims_for("not-a-number"));
        assert!(auth_user.user_id().is_err());
    }

    #[test]
    fn username_comes_from_claims() {
        let auth_user = AuthUser(claims_for("1"));
        assert_eq!(auth_user.username(), "alice");
    }
}
