use crate::server::{
    data::team::TeamRepository,
    model::team::{CreateTeamParams, UpdateTeamParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_details;
mod update;
