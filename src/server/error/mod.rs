//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Status codes are chosen by matching on the variant, never on the error text.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ApiResponse,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while the domain
/// variants below map to fixed status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 409 Conflict).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Internal inconsistency such as an unknown persisted status.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Password hashing failure from Argon2.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Password hashing failed: {0}")]
    PasswordHashErr(argon2::password_hash::Error),

    /// Failure signing a new token.
    ///
    /// Token *validation* failures are `AuthError::InvalidToken`; this variant only covers
    /// encoding, which fails solely on misconfiguration. Results in 500.
    #[error("Token encoding failed: {0}")]
    TokenErr(jsonwebtoken::errors::Error),

    /// Failure binding or serving the TCP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Requester does not own the resource they attempted to act on.
    ///
    /// Results in 401 Unauthorized with the provided error message. No state was changed.
    #[error("{0}")]
    Unauthorized(String),

    /// Mutation matched the resource but changed nothing, e.g. accepting an application
    /// that was already decided or opening a period that is already open.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    NoEffect(String),

    /// Creation would duplicate an existing application or registration.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Application or registration attempted while the period is closed.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    PeriodClosed(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::PasswordHashErr(err)
    }
}

/// Request bodies the `Json` extractor rejects are reported as `BadRequest`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status code this error maps to, `AuthErr` excluded.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NoEffect(_) | Self::Conflict(_) | Self::PeriodClosed(_) => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::AuthErr(AuthError::DuplicateEmail(_)) => StatusCode::CONFLICT,
            Self::AuthErr(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `Unauthorized`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `NoEffect`, `Conflict` and `PeriodClosed`
/// - 500 Internal Server Error - For all other error types (DbErr, InternalErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg)
            | Self::Unauthorized(msg)
            | Self::NoEffect(msg)
            | Self::Conflict(msg)
            | Self::PeriodClosed(msg)
            | Self::BadRequest(msg) => {
                (status, Json(ApiResponse::empty(status.as_u16(), msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::empty(
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "Internal server error",
            )),
        )
            .into_response()
    }
}
