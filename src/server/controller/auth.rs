use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        controller::{json::AppJson, respond}, error::AppError, model::user::RegisterUserParams,
        service::auth::AuthService, state::AppState,
    },
};

/// Register a new account.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Name, email, password and optional phone, institution and skills
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Name, email or password empty
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let user = service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok(respond(StatusCode::CREATED, user.into_dto(), "Registered"))
}

/// Exchange credentials for a bearer token.
///
/// # Returns
/// - `200 OK` - Access token, its type and lifetime in seconds
/// - `400 Bad Request` - Email or password empty
/// - `401 Unauthorized` - Email unknown or password mismatch
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let token = service.login(payload.email, payload.password).await?;

    Ok(respond(StatusCode::OK, token.into_dto(), "Logged in"))
}
