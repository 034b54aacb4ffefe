//! Read-only joins backing a user's history views.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct HistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets registrations made by the user or by any of the given teams, each joined with
    /// its competition.
    ///
    /// # Arguments
    /// - `user_id` - User whose individual registrations are included
    /// - `team_ids` - Teams whose registrations are included
    ///
    /// # Returns
    /// - `Ok(Vec<(registration, Option<competition>)>)` - Rows ordered by registration id
    /// - `Err(DbErr)` - Database error during query
    pub async fn competition_registrations(
        &self,
        user_id: i32,
        team_ids: Vec<i32>,
    ) -> Result<
        Vec<(
            entity::competition_registration::Model,
            Option<entity::competition::Model>,
        )>,
        DbErr,
    > {
        let mut condition = Condition::any()
            .add(entity::competition_registration::Column::UserId.eq(user_id));
        if !team_ids.is_empty() {
            condition = condition
                .add(entity::competition_registration::Column::TeamId.is_in(team_ids));
        }

        entity::prelude::CompetitionRegistration::find()
            .filter(condition)
            .find_also_related(entity::prelude::Competition)
            .order_by_asc(entity::competition_registration::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the user's recruitment applications, each joined with its recruitment.
    ///
    /// # Returns
    /// - `Ok(Vec<(application, Option<recruitment>)>)` - Rows ordered by application id
    /// - `Err(DbErr)` - Database error during query
    pub async fn recruitment_applications(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::recruitment_application::Model,
            Option<entity::recruitment::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::RecruitmentApplication::find()
            .filter(entity::recruitment_application::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Recruitment)
            .order_by_asc(entity::recruitment_application::Column::Id)
            .all(self.db)
            .await
    }
}
