//! A user's participation history.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{history::HistoryRepository, team::TeamRepository},
    error::AppError,
    model::history::{CompetitionHistoryEntry, RecruitmentHistoryEntry},
};

pub struct HistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's competition registrations, individual and through their teams.
    ///
    /// # Returns
    /// - `Ok(Vec<CompetitionHistoryEntry>)` - Entries ordered by registration id
    /// - `Err(AppError::InternalErr)` - A row holds an unknown status
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn competition_history(
        &self,
        user_id: i32,
    ) -> Result<Vec<CompetitionHistoryEntry>, AppError> {
        let team_ids = TeamRepository::new(self.db)
            .team_ids_for_user(user_id)
            .await?;

        HistoryRepository::new(self.db)
            .competition_registrations(user_id, team_ids)
            .await?
            .into_iter()
            .filter_map(|(registration, competition)| {
                competition.map(|c| CompetitionHistoryEntry::from_entity(registration, c))
            })
            .collect()
    }

    /// Gets the user's recruitment applications.
    ///
    /// # Returns
    /// - `Ok(Vec<RecruitmentHistoryEntry>)` - Entries ordered by application id
    /// - `Err(AppError::InternalErr)` - A row holds an unknown status
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn recruitment_history(
        &self,
        user_id: i32,
    ) -> Result<Vec<RecruitmentHistoryEntry>, AppError> {
        HistoryRepository::new(self.db)
            .recruitment_applications(user_id)
            .await?
            .into_iter()
            .filter_map(|(application, recruitment)| {
                recruitment.map(|r| RecruitmentHistoryEntry::from_entity(application, r))
            })
            .collect()
    }
}
