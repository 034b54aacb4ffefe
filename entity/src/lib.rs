//! SeaORM entity models for the squadboard schema.

pub mod prelude;

pub mod competition;
pub mod competition_registration;
pub mod recruitment;
pub mod recruitment_application;
pub mod skill;
pub mod team;
pub mod team_member;
pub mod user;
