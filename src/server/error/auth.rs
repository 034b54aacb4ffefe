use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ApiResponse;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, format or expiry validation.
    ///
    /// Results in a 401 Unauthorized response. The underlying reason is logged at
    /// debug level only.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Email unknown or password hash comparison failed.
    ///
    /// Both cases share one variant so a caller cannot probe which emails exist.
    /// Results in a 401 Unauthorized response.
    #[error("Credentials do not match")]
    InvalidCredentials,

    /// Registration attempted with an email that already belongs to a user.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email {0} is already registered")]
    DuplicateEmail(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with "Authentication required"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `DuplicateEmail` → 409 Conflict with "Email is already registered"
///
/// Errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::DuplicateEmail(_) => (StatusCode::CONFLICT, "Email is already registered"),
        };

        (
            status,
            Json(ApiResponse::empty(status.as_u16(), message)),
        )
            .into_response()
    }
}
