use axum::{http::StatusCode, response::IntoResponse};

use crate::server::controller::respond;

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    respond(StatusCode::OK, "ok", "OK")
}
