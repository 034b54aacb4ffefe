//! Team lifecycle and leadership checks.
//!
//! The leader check here is shared with the recruitment service: every mutation on a team
//! or one of its recruitments goes through `TeamService::ensure_leader`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::team::TeamRepository,
    error::AppError,
    model::team::{CreateTeamParams, Team, TeamDetails, UpdateTeamParams},
    util::parse::require_text,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team with the owner as its sole leader member.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::BadRequest)` - Empty name or capacity below 1
    /// - `Err(AppError::DbErr)` - Database error, nothing is persisted
    pub async fn create(&self, mut params: CreateTeamParams) -> Result<Team, AppError> {
        params.name = require_text(params.name, "name")?;
        if params.capacity < 1 {
            return Err(AppError::BadRequest(
                "capacity must be at least 1".to_string(),
            ));
        }

        let team = TeamRepository::new(self.db).create(params).await?;

        tracing::info!("Created team {}", team.id);

        Ok(team)
    }

    /// Gets a team with its roster.
    ///
    /// # Returns
    /// - `Ok(TeamDetails)` - Team found
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn get_details(&self, id: i32) -> Result<TeamDetails, AppError> {
        TeamRepository::new(self.db)
            .get_details(id)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    /// Gets every team the user belongs to; empty when none.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Updates a team's fields on behalf of its leader.
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(AppError::NotFound)` - Team does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    /// - `Err(AppError::BadRequest)` - Empty name, or capacity below 1 or below the member count
    /// - `Err(AppError::NoEffect)` - No row was updated
    pub async fn update(&self, mut params: UpdateTeamParams) -> Result<Team, AppError> {
        params.name = require_text(params.name, "name")?;
        if params.capacity < 1 {
            return Err(AppError::BadRequest(
                "capacity must be at least 1".to_string(),
            ));
        }

        self.ensure_leader(params.id, params.requester_id).await?;

        let repo = TeamRepository::new(self.db);

        let members = repo.member_count(params.id).await?;
        if (params.capacity as u64) < members {
            return Err(AppError::BadRequest(format!(
                "capacity {} is below the current member count {}",
                params.capacity, members
            )));
        }

        let id = params.id;
        if repo.update(params).await? == 0 {
            return Err(AppError::NoEffect(format!("Team {} was not updated", id)));
        }

        repo.find_by_id(id).await?.ok_or_else(|| team_not_found(id))
    }

    /// Deletes a team and everything it owns on behalf of its leader.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(AppError::NotFound)` - Team does not exist or nothing was deleted
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    pub async fn delete(&self, id: i32, requester_id: i32) -> Result<(), AppError> {
        self.ensure_leader(id, requester_id).await?;

        if TeamRepository::new(self.db).delete(id).await? == 0 {
            return Err(team_not_found(id));
        }

        tracing::info!("Deleted team {}", id);

        Ok(())
    }

    /// Verifies the requester leads the team.
    ///
    /// # Returns
    /// - `Ok(())` - Requester is the team's leader
    /// - `Err(AppError::NotFound)` - Team does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the leader
    pub async fn ensure_leader(&self, team_id: i32, requester_id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_id(team_id).await?.is_none() {
            return Err(team_not_found(team_id));
        }

        if repo.find_leader_id(team_id).await? != Some(requester_id) {
            tracing::debug!(
                "User {} denied: not the leader of team {}",
                requester_id,
                team_id
            );
            return Err(AppError::Unauthorized(format!(
                "User {} is not the leader of team {}",
                requester_id, team_id
            )));
        }

        Ok(())
    }
}

fn team_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Team {} not found", id))
}
