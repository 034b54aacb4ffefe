//! Recruitment and application data repository.
//!
//! Application rows are returned as entity models; the service layer converts them since
//! the conversion validates the persisted status.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    recruitment::{CreateRecruitmentParams, Recruitment, UpdateRecruitmentParams},
    status::AcceptanceStatus,
};

pub struct RecruitmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecruitmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a recruitment for a team. New recruitments start closed.
    pub async fn create(&self, params: CreateRecruitmentParams) -> Result<Recruitment, DbErr> {
        let recruitment = entity::recruitment::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            role: ActiveValue::Set(params.role),
            description: ActiveValue::Set(params.description),
            is_open: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Recruitment::from_entity(recruitment))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Recruitment>, DbErr> {
        let recruitment = entity::prelude::Recruitment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(recruitment.map(Recruitment::from_entity))
    }

    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Recruitment>, DbErr> {
        let recruitments = entity::prelude::Recruitment::find()
            .filter(entity::recruitment::Column::TeamId.eq(team_id))
            .order_by_asc(entity::recruitment::Column::Id)
            .all(self.db)
            .await?;

        Ok(recruitments.into_iter().map(Recruitment::from_entity).collect())
    }

    /// Gets every recruitment currently accepting applications.
    pub async fn get_open(&self) -> Result<Vec<Recruitment>, DbErr> {
        let recruitments = entity::prelude::Recruitment::find()
            .filter(entity::recruitment::Column::IsOpen.eq(true))
            .order_by_asc(entity::recruitment::Column::Id)
            .all(self.db)
            .await?;

        Ok(recruitments.into_iter().map(Recruitment::from_entity).collect())
    }

    /// Updates a recruitment's role and description.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the recruitment does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateRecruitmentParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Recruitment::update_many()
            .col_expr(entity::recruitment::Column::Role, Expr::value(params.role))
            .col_expr(
                entity::recruitment::Column::Description,
                Expr::value(params.description),
            )
            .filter(entity::recruitment::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the open flag, only touching the row if it is in the other state.
    ///
    /// # Returns
    /// - `Ok(1)` - Flag changed
    /// - `Ok(0)` - Recruitment absent or already in the requested state
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_open(&self, id: i32, is_open: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Recruitment::update_many()
            .col_expr(entity::recruitment::Column::IsOpen, Expr::value(is_open))
            .filter(entity::recruitment::Column::Id.eq(id))
            .filter(entity::recruitment::Column::IsOpen.eq(!is_open))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a recruitment and its applications in one transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of recruitment rows deleted
    /// - `Err(DbErr)` - Database error, nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::RecruitmentApplication::delete_many()
            .filter(entity::recruitment_application::Column::RecruitmentId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Recruitment::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }

    /// Creates a pending, open application.
    pub async fn create_application(
        &self,
        recruitment_id: i32,
        user_id: i32,
    ) -> Result<entity::recruitment_application::Model, DbErr> {
        entity::recruitment_application::ActiveModel {
            recruitment_id: ActiveValue::Set(recruitment_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(AcceptanceStatus::Pending.as_str().to_string()),
            is_open: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_application(
        &self,
        id: i32,
    ) -> Result<Option<entity::recruitment_application::Model>, DbErr> {
        entity::prelude::RecruitmentApplication::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Checks whether the user still holds an open application to the recruitment.
    pub async fn has_open_application(
        &self,
        recruitment_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::RecruitmentApplication::find()
            .filter(entity::recruitment_application::Column::RecruitmentId.eq(recruitment_id))
            .filter(entity::recruitment_application::Column::UserId.eq(user_id))
            .filter(entity::recruitment_application::Column::IsOpen.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_applications(
        &self,
        recruitment_id: i32,
    ) -> Result<Vec<entity::recruitment_application::Model>, DbErr> {
        entity::prelude::RecruitmentApplication::find()
            .filter(entity::recruitment_application::Column::RecruitmentId.eq(recruitment_id))
            .order_by_asc(entity::recruitment_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Records a decision on an application that is still pending and open.
    ///
    /// The status guard lives in the `WHERE` clause so two concurrent decisions resolve
    /// to one update and one no-op.
    ///
    /// # Returns
    /// - `Ok(1)` - Decision recorded and the application closed
    /// - `Ok(0)` - Application absent, already decided or withdrawn
    /// - `Err(DbErr)` - Database error during update
    pub async fn decide_application(
        &self,
        id: i32,
        status: AcceptanceStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::RecruitmentApplication::update_many()
            .col_expr(
                entity::recruitment_application::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::recruitment_application::Column::IsOpen,
                Expr::value(false),
            )
            .filter(entity::recruitment_application::Column::Id.eq(id))
            .filter(
                entity::recruitment_application::Column::Status
                    .eq(AcceptanceStatus::Pending.as_str()),
            )
            .filter(entity::recruitment_application::Column::IsOpen.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Closes a still pending application on behalf of its applicant.
    ///
    /// # Returns
    /// - `Ok(1)` - Application withdrawn
    /// - `Ok(0)` - Application absent, decided or already withdrawn
    /// - `Err(DbErr)` - Database error during update
    pub async fn withdraw_application(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RecruitmentApplication::update_many()
            .col_expr(
                entity::recruitment_application::Column::IsOpen,
                Expr::value(false),
            )
            .filter(entity::recruitment_application::Column::Id.eq(id))
            .filter(
                entity::recruitment_application::Column::Status
                    .eq(AcceptanceStatus::Pending.as_str()),
            )
            .filter(entity::recruitment_application::Column::IsOpen.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
