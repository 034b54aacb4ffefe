use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::team::{CreateTeamDto, UpdateTeamDto},
    server::{
        controller::{json::AppJson, respond, respond_empty},
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::{CreateTeamParams, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Create a team led by the authenticated user.
///
/// # Access Control
/// - `Authenticated` - The requester becomes the team's leader
///
/// # Returns
/// - `201 Created` - The created team
/// - `400 Bad Request` - Empty name or capacity below 1
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let team = TeamService::new(&state.db)
        .create(CreateTeamParams::from_dto(auth.user_id, payload))
        .await?;

    Ok(respond(StatusCode::CREATED, team.into_dto(), "Team created"))
}

/// Get a team with its roster.
///
/// # Returns
/// - `200 OK` - Team and members
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No team with that id
pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require()?;

    let details = TeamService::new(&state.db).get_details(id).await?;

    Ok(respond(StatusCode::OK, details.into_dto(), "OK"))
}

/// Update a team.
///
/// # Access Control
/// - `Team leader` - Only the team's leader can update it
///
/// # Returns
/// - `200 OK` - The updated team
/// - `400 Bad Request` - Empty name, or capacity below 1 or below the member count
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No team with that id
/// - `409 Conflict` - Nothing was updated
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let team = TeamService::new(&state.db)
        .update(UpdateTeamParams::from_dto(id, auth.user_id, payload))
        .await?;

    Ok(respond(StatusCode::OK, team.into_dto(), "Team updated"))
}

/// Delete a team with its members, recruitments and registrations.
///
/// # Access Control
/// - `Team leader` - Only the team's leader can delete it
///
/// # Returns
/// - `200 OK` - Team deleted
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No team with that id
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    TeamService::new(&state.db).delete(id, auth.user_id).await?;

    Ok(respond_empty(StatusCode::OK, "Team deleted"))
}
