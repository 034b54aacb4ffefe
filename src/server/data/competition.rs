//! Competition and registration data repository.
//!
//! Like applications, registration rows leave this repository as entity models and are
//! converted (and validated) by the service layer.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    competition::{
        Competition, CreateCompetitionParams, Registrant, UpdateCompetitionParams,
    },
    status::AcceptanceStatus,
};

pub struct CompetitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a competition. New competitions start closed for registration.
    pub async fn create(&self, params: CreateCompetitionParams) -> Result<Competition, DbErr> {
        let competition = entity::competition::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            contact: ActiveValue::Set(params.contact),
            is_team: ActiveValue::Set(params.is_team),
            is_open: ActiveValue::Set(false),
            team_capacity: ActiveValue::Set(params.team_capacity),
            level: ActiveValue::Set(params.level),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Competition::from_entity(competition))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Competition>, DbErr> {
        let competition = entity::prelude::Competition::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(competition.map(Competition::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Competition>, DbErr> {
        let competitions = entity::prelude::Competition::find()
            .order_by_asc(entity::competition::Column::Id)
            .all(self.db)
            .await?;

        Ok(competitions.into_iter().map(Competition::from_entity).collect())
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Competition>, DbErr> {
        let competitions = entity::prelude::Competition::find()
            .filter(entity::competition::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::competition::Column::Id)
            .all(self.db)
            .await?;

        Ok(competitions.into_iter().map(Competition::from_entity).collect())
    }

    /// Updates a competition's editable fields.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the competition does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateCompetitionParams) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Competition::update_many()
            .col_expr(entity::competition::Column::Name, Expr::value(params.name))
            .col_expr(
                entity::competition::Column::Description,
                Expr::value(params.description),
            )
            .col_expr(
                entity::competition::Column::Contact,
                Expr::value(params.contact),
            )
            .col_expr(entity::competition::Column::Level, Expr::value(params.level))
            .filter(entity::competition::Column::Id.eq(params.id));

        if let Some(team_capacity) = params.team_capacity {
            update = update.col_expr(
                entity::competition::Column::TeamCapacity,
                Expr::value(team_capacity),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Sets the registration open flag, only touching the row if it is in the other state.
    ///
    /// # Returns
    /// - `Ok(1)` - Flag changed
    /// - `Ok(0)` - Competition absent or already in the requested state
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_open(&self, id: i32, is_open: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Competition::update_many()
            .col_expr(entity::competition::Column::IsOpen, Expr::value(is_open))
            .filter(entity::competition::Column::Id.eq(id))
            .filter(entity::competition::Column::IsOpen.eq(!is_open))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a competition and its registrations in one transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of competition rows deleted
    /// - `Err(DbErr)` - Database error, nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::CompetitionRegistration::delete_many()
            .filter(entity::competition_registration::Column::CompetitionId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Competition::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }

    /// Creates a pending registration for a user or a team.
    pub async fn create_registration(
        &self,
        competition_id: i32,
        registrant: Registrant,
    ) -> Result<entity::competition_registration::Model, DbErr> {
        entity::competition_registration::ActiveModel {
            competition_id: ActiveValue::Set(competition_id),
            user_id: ActiveValue::Set(registrant.user_id()),
            team_id: ActiveValue::Set(registrant.team_id()),
            status: ActiveValue::Set(AcceptanceStatus::Pending.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether the registrant already holds a registration for the competition.
    pub async fn registration_exists(
        &self,
        competition_id: i32,
        registrant: Registrant,
    ) -> Result<bool, DbErr> {
        let query = entity::prelude::CompetitionRegistration::find().filter(
            entity::competition_registration::Column::CompetitionId.eq(competition_id),
        );

        let query = match registrant {
            Registrant::User(user_id) => {
                query.filter(entity::competition_registration::Column::UserId.eq(user_id))
            }
            Registrant::Team(team_id) => {
                query.filter(entity::competition_registration::Column::TeamId.eq(team_id))
            }
        };

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn find_registration(
        &self,
        id: i32,
    ) -> Result<Option<entity::competition_registration::Model>, DbErr> {
        entity::prelude::CompetitionRegistration::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_registrations(
        &self,
        competition_id: i32,
    ) -> Result<Vec<entity::competition_registration::Model>, DbErr> {
        entity::prelude::CompetitionRegistration::find()
            .filter(entity::competition_registration::Column::CompetitionId.eq(competition_id))
            .order_by_asc(entity::competition_registration::Column::Id)
            .all(self.db)
            .await
    }

    /// Records a decision on a registration that is still pending.
    ///
    /// # Returns
    /// - `Ok(1)` - Decision recorded
    /// - `Ok(0)` - Registration absent or already decided
    /// - `Err(DbErr)` - Database error during update
    pub async fn decide_registration(
        &self,
        id: i32,
        status: AcceptanceStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::CompetitionRegistration::update_many()
            .col_expr(
                entity::competition_registration::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(entity::competition_registration::Column::Id.eq(id))
            .filter(
                entity::competition_registration::Column::Status
                    .eq(AcceptanceStatus::Pending.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
