use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::token::TokenService,
};

/// Identity extracted from a valid bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub email: String,
}

/// Checks the `Authorization: Bearer <jwt>` header of a request.
///
/// Controllers call `require()` first and pass the returned user id explicitly into the
/// service call.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Requires a valid, unexpired bearer token.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Identity carried by the token
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer `Authorization` header
    /// - `Err(AppError::AuthErr(InvalidToken))` - Malformed, expired or wrongly signed token
    pub fn require(&self) -> Result<AuthenticatedUser, AppError> {
        let token = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.decode(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
