//! Recruitment domain models and parameters.
//!
//! A recruitment is a role posting owned by a team. While open it accepts applications,
//! which the team leader later accepts or rejects.

use crate::{
    model::recruitment::{
        CreateRecruitmentDto, RecruitmentApplicationDto, RecruitmentDto, UpdateRecruitmentDto,
    },
    server::{
        error::AppError, model::status::AcceptanceStatus, util::parse::parse_acceptance_status,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Recruitment {
    pub id: i32,
    pub team_id: i32,
    pub role: String,
    pub description: String,
    pub is_open: bool,
}

impl Recruitment {
    pub fn from_entity(entity: entity::recruitment::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            role: entity.role,
            description: entity.description,
            is_open: entity.is_open,
        }
    }

    pub fn into_dto(self) -> RecruitmentDto {
        RecruitmentDto {
            id: self.id,
            team_id: self.team_id,
            role: self.role,
            description: self.description,
            is_open: self.is_open,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecruitmentApplication {
    pub id: i32,
    pub recruitment_id: i32,
    pub user_id: i32,
    pub status: AcceptanceStatus,
    pub is_open: bool,
}

impl RecruitmentApplication {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(RecruitmentApplication)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStatus))` - Stored status is not recognised
    pub fn from_entity(entity: entity::recruitment_application::Model) -> Result<Self, AppError> {
        let status = parse_acceptance_status(entity.status, "recruitment_application", entity.id)?;

        Ok(Self {
            id: entity.id,
            recruitment_id: entity.recruitment_id,
            user_id: entity.user_id,
            status,
            is_open: entity.is_open,
        })
    }

    pub fn into_dto(self) -> RecruitmentApplicationDto {
        RecruitmentApplicationDto {
            id: self.id,
            recruitment_id: self.recruitment_id,
            user_id: self.user_id,
            status: self.status.to_string(),
            is_open: self.is_open,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRecruitmentParams {
    pub team_id: i32,
    pub requester_id: i32,
    pub role: String,
    pub description: String,
}

impl CreateRecruitmentParams {
    pub fn from_dto(team_id: i32, requester_id: i32, dto: CreateRecruitmentDto) -> Self {
        Self {
            team_id,
            requester_id,
            role: dto.role,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRecruitmentParams {
    pub id: i32,
    pub requester_id: i32,
    pub role: String,
    pub description: String,
}

impl UpdateRecruitmentParams {
    pub fn from_dto(id: i32, requester_id: i32, dto: UpdateRecruitmentDto) -> Self {
        Self {
            id,
            requester_id,
            role: dto.role,
            description: dto.description,
        }
    }
}
