//! Recruitment postings and the application workflow.
//!
//! Authorization for every mutation is "requester leads the recruitment's team", except
//! `apply` (any user) and `withdraw` (the applicant).

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{recruitment::RecruitmentRepository, team::TeamRepository},
    error::AppError,
    model::{
        recruitment::{
            CreateRecruitmentParams, Recruitment, RecruitmentApplication,
            UpdateRecruitmentParams,
        },
        status::Decision,
    },
    service::team::TeamService,
    util::{db::is_unique_violation, parse::require_text},
};

pub struct RecruitmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecruitmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a closed recruitment for a team.
    ///
    /// # Returns
    /// - `Ok(Recruitment)` - The created recruitment
    /// - `Err(AppError::BadRequest)` - Empty role
    /// - `Err(AppError::NotFound)` - Team does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    pub async fn create(
        &self,
        mut params: CreateRecruitmentParams,
    ) -> Result<Recruitment, AppError> {
        params.role = require_text(params.role, "role")?;

        TeamService::new(self.db)
            .ensure_leader(params.team_id, params.requester_id)
            .await?;

        let recruitment = RecruitmentRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created recruitment {} for team {}",
            recruitment.id,
            recruitment.team_id
        );

        Ok(recruitment)
    }

    /// Gets a recruitment by id.
    ///
    /// # Returns
    /// - `Ok(Recruitment)` - Recruitment found
    /// - `Err(AppError::NotFound)` - No recruitment with that id
    pub async fn get(&self, id: i32) -> Result<Recruitment, AppError> {
        RecruitmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| recruitment_not_found(id))
    }

    /// Gets the recruitments of a team.
    ///
    /// # Returns
    /// - `Ok(Vec<Recruitment>)` - Open and closed recruitments, ordered by id
    /// - `Err(AppError::NotFound)` - Team does not exist
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Recruitment>, AppError> {
        if TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Team {} not found", team_id)));
        }

        Ok(RecruitmentRepository::new(self.db)
            .get_by_team(team_id)
            .await?)
    }

    pub async fn list_open(&self) -> Result<Vec<Recruitment>, AppError> {
        Ok(RecruitmentRepository::new(self.db).get_open().await?)
    }

    /// Updates a recruitment's role and description.
    ///
    /// # Returns
    /// - `Ok(Recruitment)` - The updated recruitment
    /// - `Err(AppError::BadRequest)` - Empty role
    /// - `Err(AppError::NotFound)` - Recruitment does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    /// - `Err(AppError::NoEffect)` - No row was updated
    pub async fn update(
        &self,
        mut params: UpdateRecruitmentParams,
    ) -> Result<Recruitment, AppError> {
        params.role = require_text(params.role, "role")?;

        let recruitment = self.get_as_leader(params.id, params.requester_id).await?;

        let repo = RecruitmentRepository::new(self.db);
        if repo.update(params).await? == 0 {
            return Err(AppError::NoEffect(format!(
                "Recruitment {} was not updated",
                recruitment.id
            )));
        }

        self.get(recruitment.id).await
    }

    /// Deletes a recruitment and its applications.
    ///
    /// # Returns
    /// - `Ok(())` - Recruitment deleted
    /// - `Err(AppError::NotFound)` - Recruitment does not exist or nothing was deleted
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    pub async fn delete(&self, id: i32, requester_id: i32) -> Result<(), AppError> {
        self.get_as_leader(id, requester_id).await?;

        if RecruitmentRepository::new(self.db).delete(id).await? == 0 {
            return Err(recruitment_not_found(id));
        }

        tracing::info!("Deleted recruitment {}", id);

        Ok(())
    }

    /// Opens the recruitment for applications.
    pub async fn open_period(&self, id: i32, requester_id: i32) -> Result<Recruitment, AppError> {
        self.set_period(id, requester_id, true).await
    }

    /// Closes the recruitment for applications.
    pub async fn close_period(&self, id: i32, requester_id: i32) -> Result<Recruitment, AppError> {
        self.set_period(id, requester_id, false).await
    }

    /// # Returns
    /// - `Ok(Recruitment)` - The recruitment in its new state
    /// - `Err(AppError::NotFound)` - Recruitment does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    /// - `Err(AppError::NoEffect)` - Already in the requested state
    async fn set_period(
        &self,
        id: i32,
        requester_id: i32,
        is_open: bool,
    ) -> Result<Recruitment, AppError> {
        self.get_as_leader(id, requester_id).await?;

        if RecruitmentRepository::new(self.db)
            .set_open(id, is_open)
            .await?
            == 0
        {
            return Err(AppError::NoEffect(format!(
                "Recruitment {} is already {}",
                id,
                if is_open { "open" } else { "closed" }
            )));
        }

        self.get(id).await
    }

    /// Applies to a recruitment.
    ///
    /// # Returns
    /// - `Ok(RecruitmentApplication)` - The pending, open application
    /// - `Err(AppError::NotFound)` - Recruitment does not exist
    /// - `Err(AppError::PeriodClosed)` - Recruitment is not accepting applications
    /// - `Err(AppError::Conflict)` - Applicant is already a member or holds an open application
    pub async fn apply(
        &self,
        recruitment_id: i32,
        applicant_id: i32,
    ) -> Result<RecruitmentApplication, AppError> {
        let recruitment = self.get(recruitment_id).await?;

        if !recruitment.is_open {
            return Err(AppError::PeriodClosed(format!(
                "Recruitment {} is not accepting applications",
                recruitment_id
            )));
        }

        if TeamRepository::new(self.db)
            .is_member(recruitment.team_id, applicant_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "User {} is already a member of team {}",
                applicant_id, recruitment.team_id
            )));
        }

        let repo = RecruitmentRepository::new(self.db);

        if repo
            .has_open_application(recruitment_id, applicant_id)
            .await?
        {
            return Err(already_applied(recruitment_id, applicant_id));
        }

        let application = repo
            .create_application(recruitment_id, applicant_id)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    already_applied(recruitment_id, applicant_id)
                } else {
                    err.into()
                }
            })?;

        RecruitmentApplication::from_entity(application)
    }

    /// Accepts or rejects a pending application on behalf of the team leader.
    ///
    /// # Returns
    /// - `Ok(RecruitmentApplication)` - The decided, closed application
    /// - `Err(AppError::NotFound)` - Application (or its recruitment) does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    /// - `Err(AppError::NoEffect)` - Application already decided or withdrawn
    pub async fn decide(
        &self,
        application_id: i32,
        requester_id: i32,
        decision: Decision,
    ) -> Result<RecruitmentApplication, AppError> {
        let repo = RecruitmentRepository::new(self.db);

        let application = repo
            .find_application(application_id)
            .await?
            .ok_or_else(|| application_not_found(application_id))?;

        self.get_as_leader(application.recruitment_id, requester_id)
            .await?;

        if repo
            .decide_application(application_id, decision.status())
            .await?
            == 0
        {
            return Err(AppError::NoEffect(format!(
                "Application {} is no longer pending",
                application_id
            )));
        }

        self.get_application(application_id).await
    }

    /// Withdraws a pending application on behalf of its applicant.
    ///
    /// # Returns
    /// - `Ok(RecruitmentApplication)` - The withdrawn application
    /// - `Err(AppError::NotFound)` - Application does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the applicant
    /// - `Err(AppError::NoEffect)` - Application already decided or withdrawn
    pub async fn withdraw(
        &self,
        application_id: i32,
        requester_id: i32,
    ) -> Result<RecruitmentApplication, AppError> {
        let repo = RecruitmentRepository::new(self.db);

        let application = repo
            .find_application(application_id)
            .await?
            .ok_or_else(|| application_not_found(application_id))?;

        if application.user_id != requester_id {
            tracing::debug!(
                "User {} denied: not the applicant of application {}",
                requester_id,
                application_id
            );
            return Err(AppError::Unauthorized(format!(
                "User {} did not submit application {}",
                requester_id, application_id
            )));
        }

        if repo.withdraw_application(application_id).await? == 0 {
            return Err(AppError::NoEffect(format!(
                "Application {} is no longer open",
                application_id
            )));
        }

        self.get_application(application_id).await
    }

    /// Gets the applications to a recruitment on behalf of the team leader.
    ///
    /// # Returns
    /// - `Ok(Vec<RecruitmentApplication>)` - Applications ordered by id
    /// - `Err(AppError::NotFound)` - Recruitment does not exist
    /// - `Err(AppError::Unauthorized)` - Requester is not the team's leader
    pub async fn get_applications(
        &self,
        recruitment_id: i32,
        requester_id: i32,
    ) -> Result<Vec<RecruitmentApplication>, AppError> {
        self.get_as_leader(recruitment_id, requester_id).await?;

        RecruitmentRepository::new(self.db)
            .get_applications(recruitment_id)
            .await?
            .into_iter()
            .map(RecruitmentApplication::from_entity)
            .collect()
    }

    async fn get_application(&self, id: i32) -> Result<RecruitmentApplication, AppError> {
        let application = RecruitmentRepository::new(self.db)
            .find_application(id)
            .await?
            .ok_or_else(|| application_not_found(id))?;

        RecruitmentApplication::from_entity(application)
    }

    /// Loads a recruitment and checks the requester leads its team.
    async fn get_as_leader(&self, id: i32, requester_id: i32) -> Result<Recruitment, AppError> {
        let recruitment = self.get(id).await?;

        TeamService::new(self.db)
            .ensure_leader(recruitment.team_id, requester_id)
            .await?;

        Ok(recruitment)
    }
}

fn recruitment_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Recruitment {} not found", id))
}

fn application_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Application {} not found", id))
}

fn already_applied(recruitment_id: i32, applicant_id: i32) -> AppError {
    AppError::Conflict(format!(
        "User {} already applied to recruitment {}",
        applicant_id, recruitment_id
    ))
}
