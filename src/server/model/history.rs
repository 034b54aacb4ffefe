//! Read models joining a user's registrations and applications with their parents.

use crate::{
    model::history::{CompetitionHistoryDto, RecruitmentHistoryDto},
    server::{
        error::AppError, model::status::AcceptanceStatus, util::parse::parse_acceptance_status,
    },
};

/// A competition registration of the user, individual or through a team.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionHistoryEntry {
    pub registration_id: i32,
    pub competition_id: i32,
    pub competition_name: String,
    pub team_id: Option<i32>,
    pub status: AcceptanceStatus,
}

impl CompetitionHistoryEntry {
    pub fn from_entity(
        registration: entity::competition_registration::Model,
        competition: entity::competition::Model,
    ) -> Result<Self, AppError> {
        let status = parse_acceptance_status(
            registration.status,
            "competition_registration",
            registration.id,
        )?;

        Ok(Self {
            registration_id: registration.id,
            competition_id: competition.id,
            competition_name: competition.name,
            team_id: registration.team_id,
            status,
        })
    }

    pub fn into_dto(self) -> CompetitionHistoryDto {
        CompetitionHistoryDto {
            registration_id: self.registration_id,
            competition_id: self.competition_id,
            competition_name: self.competition_name,
            team_id: self.team_id,
            status: self.status.to_string(),
        }
    }
}

/// A recruitment application made by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RecruitmentHistoryEntry {
    pub application_id: i32,
    pub recruitment_id: i32,
    pub team_id: i32,
    pub role: String,
    pub status: AcceptanceStatus,
    pub is_open: bool,
}

impl RecruitmentHistoryEntry {
    pub fn from_entity(
        application: entity::recruitment_application::Model,
        recruitment: entity::recruitment::Model,
    ) -> Result<Self, AppError> {
        let status = parse_acceptance_status(
            application.status,
            "recruitment_application",
            application.id,
        )?;

        Ok(Self {
            application_id: application.id,
            recruitment_id: recruitment.id,
            team_id: recruitment.team_id,
            role: recruitment.role,
            status,
            is_open: application.is_open,
        })
    }

    pub fn into_dto(self) -> RecruitmentHistoryDto {
        RecruitmentHistoryDto {
            application_id: self.application_id,
            recruitment_id: self.recruitment_id,
            team_id: self.team_id,
            role: self.role,
            status: self.status.to_string(),
            is_open: self.is_open,
        }
    }
}
