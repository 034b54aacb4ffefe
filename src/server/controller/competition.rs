use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::competition::{
        CompetitionDto, CompetitionRegistrationDto, CreateCompetitionDto,
        RegisterCompetitionDto, UpdateCompetitionDto,
    },
    server::{
        controller::{json::AppJson, respond, respond_empty},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            competition::{
                Competition, CompetitionRegistration, CreateCompetitionParams, RegisterParams,
                UpdateCompetitionParams,
            },
            status::Decision,
        },
        service::competition::CompetitionService,
        state::AppState,
    },
};

/// Create a competition owned by the authenticated user. Competitions start closed.
///
/// # Returns
/// - `201 Created` - The created competition
/// - `400 Bad Request` - Empty name, or team competition with capacity below 1
/// - `401 Unauthorized` - Missing or invalid token
pub async fn create_competition(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateCompetitionDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let competition = CompetitionService::new(&state.db)
        .create(CreateCompetitionParams::from_dto(auth.user_id, payload))
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        competition.into_dto(),
        "Competition created",
    ))
}

/// List every competition.
pub async fn list_competitions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require()?;

    let competitions: Vec<CompetitionDto> = CompetitionService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(Competition::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, competitions, "OK"))
}

/// List the competitions owned by the authenticated user.
pub async fn get_my_competitions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let competitions: Vec<CompetitionDto> = CompetitionService::new(&state.db)
        .get_by_owner(auth.user_id)
        .await?
        .into_iter()
        .map(Competition::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, competitions, "OK"))
}

/// Get a competition by id.
///
/// # Returns
/// - `200 OK` - The competition
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No competition with that id
pub async fn get_competition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require()?;

    let competition = CompetitionService::new(&state.db).get(id).await?;

    Ok(respond(StatusCode::OK, competition.into_dto(), "OK"))
}

/// Update a competition.
///
/// # Access Control
/// - `Owner` - Only the competition's owner
///
/// # Returns
/// - `200 OK` - The updated competition
/// - `400 Bad Request` - Empty name, or team capacity below 1
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the owner
/// - `404 Not Found` - No competition with that id
/// - `409 Conflict` - Nothing was updated
pub async fn update_competition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateCompetitionDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let competition = CompetitionService::new(&state.db)
        .update(UpdateCompetitionParams::from_dto(id, auth.user_id, payload))
        .await?;

    Ok(respond(
        StatusCode::OK,
        competition.into_dto(),
        "Competition updated",
    ))
}

/// Delete a competition and its registrations.
///
/// # Access Control
/// - `Owner` - Only the competition's owner
///
/// # Returns
/// - `200 OK` - Competition deleted
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the owner
/// - `404 Not Found` - No competition with that id
pub async fn delete_competition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    CompetitionService::new(&state.db)
        .delete(id, auth.user_id)
        .await?;

    Ok(respond_empty(StatusCode::OK, "Competition deleted"))
}

/// Open a competition for registrations.
///
/// # Returns
/// - `200 OK` - The opened competition
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the owner
/// - `404 Not Found` - No competition with that id
/// - `409 Conflict` - Already open
pub async fn open_competition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let competition = CompetitionService::new(&state.db)
        .open_period(id, auth.user_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        competition.into_dto(),
        "Registration period opened",
    ))
}

/// Close a competition for registrations.
///
/// Same access control and responses as `open_competition`, with `409` when already closed.
pub async fn close_competition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let competition = CompetitionService::new(&state.db)
        .close_period(id, auth.user_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        competition.into_dto(),
        "Registration period closed",
    ))
}

/// Get the registrations of a competition.
///
/// # Access Control
/// - `Owner` - Only the competition's owner
///
/// # Returns
/// - `200 OK` - Registrations ordered by id
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the owner
/// - `404 Not Found` - No competition with that id
pub async fn get_registrations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let registrations: Vec<CompetitionRegistrationDto> = CompetitionService::new(&state.db)
        .get_registrations(id, auth.user_id)
        .await?
        .into_iter()
        .map(CompetitionRegistration::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, registrations, "OK"))
}

/// Register to a competition, individually or with a team the requester leads.
///
/// The body is optional for individual competitions; team competitions need `team_id`.
///
/// # Returns
/// - `201 Created` - The pending registration
/// - `400 Bad Request` - Team id missing or unexpected, or team exceeds the team capacity
/// - `401 Unauthorized` - Missing or invalid token, or requester does not lead the team
/// - `404 Not Found` - No competition (or team) with that id
/// - `409 Conflict` - Period closed or already registered
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<AppJson<RegisterCompetitionDto>>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let payload = payload.map(|AppJson(dto)| dto).unwrap_or_default();

    let registration = CompetitionService::new(&state.db)
        .register(RegisterParams {
            competition_id: id,
            requester_id: auth.user_id,
            team_id: payload.team_id,
        })
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        registration.into_dto(),
        "Registration submitted",
    ))
}

/// Accept a pending registration.
///
/// # Access Control
/// - `Owner` - Only the competition's owner
///
/// # Returns
/// - `200 OK` - The accepted registration
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the owner
/// - `404 Not Found` - No registration with that id
/// - `409 Conflict` - A decision was already recorded
pub async fn accept_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let registration = CompetitionService::new(&state.db)
        .decide(id, auth.user_id, Decision::Accept)
        .await?;

    Ok(respond(
        StatusCode::OK,
        registration.into_dto(),
        "Registration accepted",
    ))
}

/// Reject a pending registration.
///
/// Same access control and responses as `accept_registration`.
pub async fn reject_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let registration = CompetitionService::new(&state.db)
        .decide(id, auth.user_id, Decision::Reject)
        .await?;

    Ok(respond(
        StatusCode::OK,
        registration.into_dto(),
        "Registration rejected",
    ))
}
