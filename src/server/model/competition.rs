//! Competition domain models and parameters.
//!
//! Competitions are owned by the user that created them. A competition is either
//! individual or team based, which decides whether registrations reference a user or
//! a team.

use crate::{
    model::competition::{
        CompetitionDto, CompetitionRegistrationDto, CreateCompetitionDto, UpdateCompetitionDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::status::AcceptanceStatus,
        util::parse::parse_acceptance_status,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub contact: String,
    pub is_team: bool,
    pub is_open: bool,
    pub team_capacity: i32,
    pub level: String,
}

impl Competition {
    pub fn from_entity(entity: entity::competition::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            contact: entity.contact,
            is_team: entity.is_team,
            is_open: entity.is_open,
            team_capacity: entity.team_capacity,
            level: entity.level,
        }
    }

    pub fn into_dto(self) -> CompetitionDto {
        CompetitionDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            contact: self.contact,
            is_team: self.is_team,
            is_open: self.is_open,
            team_capacity: self.team_capacity,
            level: self.level,
        }
    }
}

/// Who a registration is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registrant {
    User(i32),
    Team(i32),
}

impl Registrant {
    /// Builds a registrant from the two nullable columns, which must hold exactly one id.
    pub fn from_columns(
        registration_id: i32,
        user_id: Option<i32>,
        team_id: Option<i32>,
    ) -> Result<Self, AppError> {
        match (user_id, team_id) {
            (Some(user_id), None) => Ok(Self::User(user_id)),
            (None, Some(team_id)) => Ok(Self::Team(team_id)),
            _ => Err(InternalError::InvalidRegistrant(registration_id).into()),
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::User(id) => Some(*id),
            Self::Team(_) => None,
        }
    }

    pub fn team_id(&self) -> Option<i32> {
        match self {
            Self::User(_) => None,
            Self::Team(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionRegistration {
    pub id: i32,
    pub competition_id: i32,
    pub registrant: Registrant,
    pub status: AcceptanceStatus,
}

impl CompetitionRegistration {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CompetitionRegistration)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Unknown status or malformed registrant columns
    pub fn from_entity(entity: entity::competition_registration::Model) -> Result<Self, AppError> {
        let registrant = Registrant::from_columns(entity.id, entity.user_id, entity.team_id)?;
        let status = parse_acceptance_status(entity.status, "competition_registration", entity.id)?;

        Ok(Self {
            id: entity.id,
            competition_id: entity.competition_id,
            registrant,
            status,
        })
    }

    pub fn into_dto(self) -> CompetitionRegistrationDto {
        CompetitionRegistrationDto {
            id: self.id,
            competition_id: self.competition_id,
            user_id: self.registrant.user_id(),
            team_id: self.registrant.team_id(),
            status: self.status.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompetitionParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub contact: String,
    pub is_team: bool,
    pub team_capacity: i32,
    pub level: String,
}

impl CreateCompetitionParams {
    pub fn from_dto(owner_id: i32, dto: CreateCompetitionDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            contact: dto.contact,
            is_team: dto.is_team,
            team_capacity: dto.team_capacity,
            level: dto.level,
        }
    }
}

/// Parameters for updating a competition. The team flag is fixed at creation since
/// existing registrations depend on it.
#[derive(Debug, Clone)]
pub struct UpdateCompetitionParams {
    pub id: i32,
    pub requester_id: i32,
    pub name: String,
    pub description: String,
    pub contact: String,
    /// `None` keeps the stored capacity.
    pub team_capacity: Option<i32>,
    pub level: String,
}

impl UpdateCompetitionParams {
    pub fn from_dto(id: i32, requester_id: i32, dto: UpdateCompetitionDto) -> Self {
        Self {
            id,
            requester_id,
            name: dto.name,
            description: dto.description,
            contact: dto.contact,
            team_capacity: dto.team_capacity,
            level: dto.level,
        }
    }
}

/// Parameters for registering to a competition.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub competition_id: i32,
    pub requester_id: i32,
    /// Required for team competitions, must be absent for individual ones.
    pub team_id: Option<i32>,
}
