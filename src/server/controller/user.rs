use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::team::TeamDto,
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::Team,
        service::{team::TeamService, user::UserService},
        state::AppState,
    },
};

/// Get the authenticated user's profile.
///
/// # Access Control
/// - `Authenticated` - Any valid bearer token
///
/// # Returns
/// - `200 OK` - User with skills
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The token's user no longer exists
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let user = UserService::new(&state.db).get_user(auth.user_id).await?;

    Ok(respond(StatusCode::OK, user.into_dto(), "OK"))
}

/// Get a user's profile by id.
///
/// # Access Control
/// - `Authenticated` - Any valid bearer token
///
/// # Returns
/// - `200 OK` - User with skills
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require()?;

    let user = UserService::new(&state.db).get_user(id).await?;

    Ok(respond(StatusCode::OK, user.into_dto(), "OK"))
}

/// Get the teams the authenticated user belongs to.
///
/// # Returns
/// - `200 OK` - Teams, possibly empty
/// - `401 Unauthorized` - Missing or invalid token
pub async fn get_my_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let teams: Vec<TeamDto> = TeamService::new(&state.db)
        .get_by_user(auth.user_id)
        .await?
        .into_iter()
        .map(Team::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, teams, "OK"))
}
