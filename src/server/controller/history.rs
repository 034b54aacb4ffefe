use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::history::{CompetitionHistoryDto, RecruitmentHistoryDto},
    server::{
        controller::respond,
        error::AppError,
        middleware::auth::AuthGuard,
        model::history::{CompetitionHistoryEntry, RecruitmentHistoryEntry},
        service::history::HistoryService,
        state::AppState,
    },
};

/// Get the authenticated user's competition registrations, including team registrations.
///
/// # Returns
/// - `200 OK` - History entries ordered by registration id
/// - `401 Unauthorized` - Missing or invalid token
pub async fn get_competition_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let history: Vec<CompetitionHistoryDto> = HistoryService::new(&state.db)
        .competition_history(auth.user_id)
        .await?
        .into_iter()
        .map(CompetitionHistoryEntry::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, history, "OK"))
}

/// Get the authenticated user's recruitment applications.
///
/// # Returns
/// - `200 OK` - History entries ordered by application id
/// - `401 Unauthorized` - Missing or invalid token
pub async fn get_recruitment_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.tokens, &headers).require()?;

    let history: Vec<RecruitmentHistoryDto> = HistoryService::new(&state.db)
        .recruitment_history(auth.user_id)
        .await?
        .into_iter()
        .map(RecruitmentHistoryEntry::into_dto)
        .collect();

    Ok(respond(StatusCode::OK, history, "OK"))
}
