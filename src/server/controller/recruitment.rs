use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::recruitment::{
        CreateRecruitmentDto, RecruitmentApplicationDto, RecruitmentDto, UpdateRecruitmentDto,
    },
    server::{
        controller::{json::AppJson, respond, respond_empty},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            recruitment::{
                CreateRecruitmentParams, Recruitment, RecruitmentApplication,
                UpdateRecruitmentParams,
            },
            status::Decision,
        },
        service::recruitment::RecruitmentService,
        state::AppState,
    },
};

/// Create a recruitment for a team. Recruitments start closed.
///
/// # Access Control
/// - `Team leader` - Only the team's leader can post recruitments
///
/// # Returns
/// - `201 Created` - The created recruitment
/// - `400 Bad Request` - Empty role
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No team with that id
pub async fn create_recruitment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
    AppJson(payload): AppJson<CreateRecruitmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let recruitment = RecruitmentService::new(&state.db)
        .create(CreateRecruitmentParams::from_dto(
            team_id,
            auth.user_id,
            payload,
        ))
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        recruitment.into_dto(),
        "Recruitment created",
    ))
}

/// Get the recruitments of a team.
///
/// # Returns
/// - `200 OK` - Recruitments, open and closed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No team with that id
pub async fn get_team_recruitments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require()?;

    let recruitments: Vec<RecruitmentDto> = RecruitmentService::new(&state.db)
        .get_by_team(team_id)
        .await?
        .into_iter()
        .map(Recruitment::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, recruitments, "OK"))
}

/// List recruitments currently accepting applications.
pub async fn list_open_recruitments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require()?;

    let recruitments: Vec<RecruitmentDto> = RecruitmentService::new(&state.db)
        .list_open()
        .await?
        .into_iter()
        .map(Recruitment::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, recruitments, "OK"))
}

/// Get a recruitment by id.
///
/// # Returns
/// - `200 OK` - The recruitment
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No recruitment with that id
pub async fn get_recruitment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require()?;

    let recruitment = RecruitmentService::new(&state.db).get(id).await?;

    Ok(respond(StatusCode::OK, recruitment.into_dto(), "OK"))
}

/// Update a recruitment's role and description.
///
/// # Access Control
/// - `Team leader` - Only the owning team's leader
///
/// # Returns
/// - `200 OK` - The updated recruitment
/// - `400 Bad Request` - Empty role
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No recruitment with that id
/// - `409 Conflict` - Nothing was updated
pub async fn update_recruitment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateRecruitmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let recruitment = RecruitmentService::new(&state.db)
        .update(UpdateRecruitmentParams::from_dto(id, auth.user_id, payload))
        .await?;

    Ok(respond(
        StatusCode::OK,
        recruitment.into_dto(),
        "Recruitment updated",
    ))
}

/// Delete a recruitment and its applications.
///
/// # Access Control
/// - `Team leader` - Only the owning team's leader
///
/// # Returns
/// - `200 OK` - Recruitment deleted
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No recruitment with that id
pub async fn delete_recruitment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    RecruitmentService::new(&state.db)
        .delete(id, auth.user_id)
        .await?;

    Ok(respond_empty(StatusCode::OK, "Recruitment deleted"))
}

/// Open a recruitment for applications.
///
/// # Returns
/// - `200 OK` - The opened recruitment
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No recruitment with that id
/// - `409 Conflict` - Already open
pub async fn open_recruitment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let recruitment = RecruitmentService::new(&state.db)
        .open_period(id, auth.user_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        recruitment.into_dto(),
        "Application period opened",
    ))
}

/// Close a recruitment for applications.
///
/// # Returns
/// - `200 OK` - The closed recruitment
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No recruitment with that id
/// - `409 Conflict` - Already closed
pub async fn close_recruitment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let recruitment = RecruitmentService::new(&state.db)
        .close_period(id, auth.user_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        recruitment.into_dto(),
        "Application period closed",
    ))
}

/// Get the applications to a recruitment.
///
/// # Access Control
/// - `Team leader` - Only the owning team's leader
///
/// # Returns
/// - `200 OK` - Applications ordered by id
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No recruitment with that id
pub async fn get_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let applications: Vec<RecruitmentApplicationDto> = RecruitmentService::new(&state.db)
        .get_applications(id, auth.user_id)
        .await?
        .into_iter()
        .map(RecruitmentApplication::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, applications, "OK"))
}

/// Apply to a recruitment as the authenticated user.
///
/// # Returns
/// - `201 Created` - The pending application
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No recruitment with that id
/// - `409 Conflict` - Period closed, already applied, or already a team member
pub async fn apply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let application = RecruitmentService::new(&state.db)
        .apply(id, auth.user_id)
        .await?;

    Ok(respond(
        StatusCode::CREATED,
        application.into_dto(),
        "Application submitted",
    ))
}

/// Accept a pending application.
///
/// # Access Control
/// - `Team leader` - Only the leader of the recruitment's team
///
/// # Returns
/// - `200 OK` - The accepted application
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the leader
/// - `404 Not Found` - No application with that id
/// - `409 Conflict` - Already decided or withdrawn
pub async fn accept_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let application = RecruitmentService::new(&state.db)
        .decide(id, auth.user_id, Decision::Accept)
        .await?;

    Ok(respond(
        StatusCode::OK,
        application.into_dto(),
        "Application accepted",
    ))
}

/// Reject a pending application.
///
/// Same access control and responses as `accept_application`.
pub async fn reject_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let application = RecruitmentService::new(&state.db)
        .decide(id, auth.user_id, Decision::Reject)
        .await?;

    Ok(respond(
        StatusCode::OK,
        application.into_dto(),
        "Application rejected",
    ))
}

/// Withdraw the authenticated user's pending application.
///
/// # Access Control
/// - `Applicant` - Only the user who applied
///
/// # Returns
/// - `200 OK` - The withdrawn application
/// - `401 Unauthorized` - Missing or invalid token, or requester is not the applicant
/// - `404 Not Found` - No application with that id
/// - `409 Conflict` - Already decided or withdrawn
pub async fn withdraw_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let application = RecruitmentService::new(&state.db)
        .withdraw(id, auth.user_id)
        .await?;

    Ok(respond(
        StatusCode::OK,
        application.into_dto(),
        "Application withdrawn",
    ))
}
