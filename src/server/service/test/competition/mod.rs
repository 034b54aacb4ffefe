use crate::server::{
    error::AppError,
    model::{
        competition::{
            CreateCompetitionParams, RegisterParams, Registrant, UpdateCompetitionParams,
        },
        status::{AcceptanceStatus, Decision},
    },
    service::competition::CompetitionService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod register;
mod team;

fn individual(competition_id: i32, requester_id: i32) -> RegisterParams {
    RegisterParams {
        competition_id,
        requester_id,
        team_id: None,
    }
}
