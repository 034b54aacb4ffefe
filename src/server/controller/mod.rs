//! HTTP request handlers.
//!
//! Controllers authenticate the request with `AuthGuard`, convert request DTOs into
//! operation parameters, call exactly one service method with the requester's id, and
//! wrap the resulting DTO in the `ApiResponse` envelope.

pub mod auth;
pub mod competition;
pub mod health;
pub mod history;
pub mod json;
pub mod recruitment;
pub mod team;
pub mod user;

use axum::{http::StatusCode, Json};

use crate::model::api::ApiResponse;

/// Wraps a payload in the response envelope with a matching status code.
pub fn respond<T>(
    status: StatusCode,
    data: T,
    message: &str,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (status, Json(ApiResponse::new(status.as_u16(), data, message)))
}

/// Envelope without a payload, for deletions.
pub fn respond_empty(status: StatusCode, message: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (status, Json(ApiResponse::empty(status.as_u16(), message)))
}
