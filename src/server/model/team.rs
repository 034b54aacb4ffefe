//! Team domain models and parameters.
//!
//! A team is a named group with a capacity and a roster of members, exactly one of
//! which is the leader. The leader holds authority over team and recruitment mutations.

use crate::model::team::{
    CreateTeamDto, TeamDetailsDto, TeamDto, TeamMemberDto, UpdateTeamDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            capacity: entity.capacity,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            description: self.description,
            capacity: self.capacity,
        }
    }
}

/// Roster entry joined with the member's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub user_id: i32,
    pub name: String,
    pub is_leader: bool,
}

impl TeamMember {
    /// Converts a membership row and its (optional) user row.
    ///
    /// A missing user row only happens if the user was removed outside the
    /// application; the member is then shown with an empty name.
    pub fn from_entity(
        member: entity::team_member::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        Self {
            user_id: member.user_id,
            name: user.map(|u| u.name).unwrap_or_default(),
            is_leader: member.is_leader,
        }
    }

    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            user_id: self.user_id,
            name: self.name,
            is_leader: self.is_leader,
        }
    }
}

/// Team with its full roster.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDetails {
    pub team: Team,
    pub members: Vec<TeamMember>,
}

impl TeamDetails {
    /// Id of the member holding leader status, if any.
    pub fn leader_id(&self) -> Option<i32> {
        self.members.iter().find(|m| m.is_leader).map(|m| m.user_id)
    }

    pub fn into_dto(self) -> TeamDetailsDto {
        TeamDetailsDto {
            leader_id: self.leader_id(),
            id: self.team.id,
            name: self.team.name,
            description: self.team.description,
            capacity: self.team.capacity,
            members: self.members.into_iter().map(TeamMember::into_dto).collect(),
        }
    }
}

/// Parameters for creating a team. `owner_id` becomes the leader.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
}

impl CreateTeamParams {
    pub fn from_dto(owner_id: i32, dto: CreateTeamDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            capacity: dto.capacity,
        }
    }
}

/// Parameters for updating a team's fields.
#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub requester_id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
}

impl UpdateTeamParams {
    pub fn from_dto(id: i32, requester_id: i32, dto: UpdateTeamDto) -> Self {
        Self {
            id,
            requester_id,
            name: dto.name,
            description: dto.description,
            capacity: dto.capacity,
        }
    }
}
