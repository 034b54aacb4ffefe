//! Competitions and their registration workflow.
//!
//! Every mutation is owner-only, except `register`, which any user may call for
//! themselves or for a team they lead.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{competition::CompetitionRepository, team::TeamRepository},
    error::AppError,
    model::{
        competition::{
            Competition, CompetitionRegistration, CreateCompetitionParams, RegisterParams,
            Registrant, UpdateCompetitionParams,
        },
        status::Decision,
    },
    util::{db::is_unique_violation, parse::require_text},
};

pub struct CompetitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a closed competition owned by the requester.
    ///
    /// # Returns
    /// - `Ok(Competition)` - The created competition
    /// - `Err(AppError::BadRequest)` - Empty name, or team competition with capacity below 1
    pub async fn create(
        &self,
        mut params: CreateCompetitionParams,
    ) -> Result<Competition, AppError> {
        params.name = require_text(params.name, "name")?;
        validate_team_capacity(params.is_team, params.team_capacity)?;

        let competition = CompetitionRepository::new(self.db).create(params).await?;

        tracing::info!("Created competition {}", competition.id);

        Ok(competition)
    }

    /// Gets a competition by id.
    ///
    /// # Returns
    /// - `Ok(Competition)` - Competition found
    /// - `Err(AppError::NotFound)` - No competition with that id
    pub async fn get(&self, id: i32) -> Result<Competition, AppError> {
        CompetitionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| competition_not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<Competition>, AppError> {
        Ok(CompetitionRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Competition>, AppError> {
        Ok(CompetitionRepository::new(self.db)
            .get_by_owner(owner_id)
            .await?)
    }

    /// Updates a competition on behalf of its owner.
    ///
    /// # Returns
    /// - `Ok(Competition)` - The updated competition
    /// - `Err(AppError::BadRequest)` - Empty name, or team capacity below 1
    /// - `Err(AppError::NotFound)` - Competition does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the owner
    /// - `Err(AppError::NoEffect)` - No row was updated
    pub async fn update(
        &self,
        mut params: UpdateCompetitionParams,
    ) -> Result<Competition, AppError> {
        params.name = require_text(params.name, "name")?;

        let competition = self.get_as_owner(params.id, params.requester_id).await?;
        validate_team_capacity(
            competition.is_team,
            params.team_capacity.unwrap_or(competition.team_capacity),
        )?;

        if CompetitionRepository::new(self.db).update(params).await? == 0 {
            return Err(AppError::NoEffect(format!(
                "Competition {} was not updated",
                competition.id
            )));
        }

        self.get(competition.id).await
    }

    /// Deletes a competition and its registrations on behalf of its owner.
    ///
    /// # Returns
    /// - `Ok(())` - Competition deleted
    /// - `Err(AppError::NotFound)` - Competition does not exist or nothing was deleted
    /// - `Err(AppError::Unauthorized)` - Requester is not the owner
    pub async fn delete(&self, id: i32, requester_id: i32) -> Result<(), AppError> {
        self.get_as_owner(id, requester_id).await?;

        if CompetitionRepository::new(self.db).delete(id).await? == 0 {
            return Err(competition_not_found(id));
        }

        tracing::info!("Deleted competition {}", id);

        Ok(())
    }

    /// Opens the competition for registrations.
    pub async fn open_period(&self, id: i32, requester_id: i32) -> Result<Competition, AppError> {
        self.set_period(id, requester_id, true).await
    }

    /// Closes the competition for registrations.
    pub async fn close_period(&self, id: i32, requester_id: i32) -> Result<Competition, AppError> {
        self.set_period(id, requester_id, false).await
    }

    async fn set_period(
        &self,
        id: i32,
        requester_id: i32,
        is_open: bool,
    ) -> Result<Competition, AppError> {
        self.get_as_owner(id, requester_id).await?;

        if CompetitionRepository::new(self.db)
            .set_open(id, is_open)
            .await?
            == 0
        {
            return Err(AppError::NoEffect(format!(
                "Competition {} is already {}",
                id,
                if is_open { "open" } else { "closed" }
            )));
        }

        self.get(id).await
    }

    /// Registers the requester, or a team they lead, to a competition.
    ///
    /// Individual competitions take no team id. Team competitions require a team led by the
    /// requester whose member count fits the competition's team capacity.
    ///
    /// # Returns
    /// - `Ok(CompetitionRegistration)` - The pending registration
    /// - `Err(AppError::NotFound)` - Competition or team does not exist
    /// - `Err(AppError::PeriodClosed)` - Competition is not accepting registrations
    /// - `Err(AppError::BadRequest)` - Team id missing/unexpected, or team too large
    /// - `Err(AppError::Unauthorized)` - Requester does not lead the team
    /// - `Err(AppError::Conflict)` - Registrant is already registered
    pub async fn register(
        &self,
        params: RegisterParams,
    ) -> Result<CompetitionRegistration, AppError> {
        let competition = self.get(params.competition_id).await?;

        if !competition.is_open {
            return Err(AppError::PeriodClosed(format!(
                "Competition {} is not accepting registrations",
                competition.id
            )));
        }

        let registrant = match (competition.is_team, params.team_id) {
            (false, None) => Registrant::User(params.requester_id),
            (false, Some(_)) => {
                return Err(AppError::BadRequest(format!(
                    "Competition {} only accepts individual registrations",
                    competition.id
                )))
            }
            (true, None) => {
                return Err(AppError::BadRequest(format!(
                    "Competition {} requires a team id",
                    competition.id
                )))
            }
            (true, Some(team_id)) => {
                self.check_team_registrant(&competition, team_id, params.requester_id)
                    .await?;
                Registrant::Team(team_id)
            }
        };

        let repo = CompetitionRepository::new(self.db);

        if repo.registration_exists(competition.id, registrant).await? {
            return Err(already_registered(competition.id));
        }

        let registration = repo
            .create_registration(competition.id, registrant)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    already_registered(competition.id)
                } else {
                    err.into()
                }
            })?;

        CompetitionRegistration::from_entity(registration)
    }

    /// Accepts or rejects a pending registration on behalf of the competition owner.
    ///
    /// # Returns
    /// - `Ok(CompetitionRegistration)` - The decided registration
    /// - `Err(AppError::NotFound)` - Registration (or its competition) does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the owner
    /// - `Err(AppError::NoEffect)` - A decision was already recorded
    pub async fn decide(
        &self,
        registration_id: i32,
        requester_id: i32,
        decision: Decision,
    ) -> Result<CompetitionRegistration, AppError> {
        let repo = CompetitionRepository::new(self.db);

        let registration = repo
            .find_registration(registration_id)
            .await?
            .ok_or_else(|| registration_not_found(registration_id))?;

        self.get_as_owner(registration.competition_id, requester_id)
            .await?;

        if repo
            .decide_registration(registration_id, decision.status())
            .await?
            == 0
        {
            return Err(AppError::NoEffect(format!(
                "Registration {} is no longer pending",
                registration_id
            )));
        }

        let registration = repo
            .find_registration(registration_id)
            .await?
            .ok_or_else(|| registration_not_found(registration_id))?;

        CompetitionRegistration::from_entity(registration)
    }

    /// Gets the registrations of a competition on behalf of its owner.
    ///
    /// # Returns
    /// - `Ok(Vec<CompetitionRegistration>)` - Registrations ordered by id
    /// - `Err(AppError::NotFound)` - Competition does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the owner
    pub async fn get_registrations(
        &self,
        competition_id: i32,
        requester_id: i32,
    ) -> Result<Vec<CompetitionRegistration>, AppError> {
        self.get_as_owner(competition_id, requester_id).await?;

        CompetitionRepository::new(self.db)
            .get_registrations(competition_id)
            .await?
            .into_iter()
            .map(CompetitionRegistration::from_entity)
            .collect()
    }

    async fn check_team_registrant(
        &self,
        competition: &Competition,
        team_id: i32,
        requester_id: i32,
    ) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Team {} not found", team_id)));
        }

        if repo.find_leader_id(team_id).await? != Some(requester_id) {
            tracing::debug!(
                "User {} denied: cannot register team {} without leading it",
                requester_id,
                team_id
            );
            return Err(AppError::Unauthorized(format!(
                "User {} is not the leader of team {}",
                requester_id, team_id
            )));
        }

        let members = repo.member_count(team_id).await?;
        if members > competition.team_capacity.max(0) as u64 {
            return Err(AppError::BadRequest(format!(
                "Team {} has {} members, competition {} allows {}",
                team_id, members, competition.id, competition.team_capacity
            )));
        }

        Ok(())
    }

    /// Loads a competition and checks the requester owns it.
    async fn get_as_owner(&self, id: i32, requester_id: i32) -> Result<Competition, AppError> {
        let competition = self.get(id).await?;

        if competition.owner_id != requester_id {
            tracing::debug!(
                "User {} denied: not the owner of competition {}",
                requester_id,
                id
            );
            return Err(AppError::Unauthorized(format!(
                "User {} does not own competition {}",
                requester_id, id
            )));
        }

        Ok(competition)
    }
}

fn validate_team_capacity(is_team: bool, team_capacity: i32) -> Result<(), AppError> {
    if is_team && team_capacity < 1 {
        return Err(AppError::BadRequest(
            "team_capacity must be at least 1 for team competitions".to_string(),
        ));
    }

    Ok(())
}

fn competition_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Competition {} not found", id))
}

fn registration_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Registration {} not found", id))
}

fn already_registered(competition_id: i32) -> AppError {
    AppError::Conflict(format!(
        "Already registered to competition {}",
        competition_id
    ))
}
