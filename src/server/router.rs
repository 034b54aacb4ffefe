use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        auth::{login, register},
        competition::{
            accept_registration, close_competition, create_competition, delete_competition,
            get_competition, get_my_competitions, get_registrations, list_competitions,
            open_competition, register as register_competition, reject_registration,
            update_competition,
        },
        health::health,
        history::{get_competition_history, get_recruitment_history},
        recruitment::{
            accept_application, apply, close_recruitment, create_recruitment,
            delete_recruitment, get_applications, get_recruitment, get_team_recruitments,
            list_open_recruitments, open_recruitment, reject_application, update_recruitment,
            withdraw_application,
        },
        team::{create_team, delete_team, get_team, update_team},
        user::{get_current_user, get_my_teams, get_user},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users/me", get(get_current_user))
        .route("/api/users/me/teams", get(get_my_teams))
        .route(
            "/api/users/me/history/competitions",
            get(get_competition_history),
        )
        .route(
            "/api/users/me/history/recruitments",
            get(get_recruitment_history),
        )
        .route("/api/users/{id}", get(get_user))
        .route("/api/teams", post(create_team))
        .route(
            "/api/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route(
            "/api/teams/{id}/recruitments",
            get(get_team_recruitments).post(create_recruitment),
        )
        .route("/api/recruitments", get(list_open_recruitments))
        .route(
            "/api/recruitments/{id}",
            get(get_recruitment)
                .put(update_recruitment)
                .delete(delete_recruitment),
        )
        .route("/api/recruitments/{id}/open", post(open_recruitment))
        .route("/api/recruitments/{id}/close", post(close_recruitment))
        .route(
            "/api/recruitments/{id}/applications",
            get(get_applications).post(apply),
        )
        .route("/api/applications/{id}/accept", post(accept_application))
        .route("/api/applications/{id}/reject", post(reject_application))
        .route(
            "/api/applications/{id}/withdraw",
            post(withdraw_application),
        )
        .route(
            "/api/competitions",
            get(list_competitions).post(create_competition),
        )
        .route("/api/competitions/mine", get(get_my_competitions))
        .route(
            "/api/competitions/{id}",
            get(get_competition)
                .put(update_competition)
                .delete(delete_competition),
        )
        .route("/api/competitions/{id}/open", post(open_competition))
        .route("/api/competitions/{id}/close", post(close_competition))
        .route(
            "/api/competitions/{id}/registrations",
            get(get_registrations).post(register_competition),
        )
        .route(
            "/api/registrations/{id}/accept",
            post(accept_registration),
        )
        .route(
            "/api/registrations/{id}/reject",
            post(reject_registration),
        )
        .layer(TraceLayer::new_for_http())
}
