//! Team data repository.
//!
//! Teams own their member roster, their recruitments (and those recruitments'
//! applications) and their competition registrations. Creation and deletion touch several
//! tables and run inside a transaction.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::team::{
    CreateTeamParams, Team, TeamDetails, TeamMember, UpdateTeamParams,
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team and the owner's leader membership in one transaction.
    ///
    /// # Arguments
    /// - `params` - Team fields and the owner who becomes leader
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error, nothing is persisted
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let txn = self.db.begin().await?;

        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            capacity: ActiveValue::Set(params.capacity),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            user_id: ActiveValue::Set(params.owner_id),
            is_leader: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Team::from_entity(team))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(team.map(Team::from_entity))
    }

    /// Gets a team with its roster, leader first.
    ///
    /// # Returns
    /// - `Ok(Some(TeamDetails))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_details(&self, id: i32) -> Result<Option<TeamDetails>, DbErr> {
        let Some(team) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let members = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::team_member::Column::IsLeader)
            .order_by_asc(entity::team_member::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(member, user)| TeamMember::from_entity(member, user))
            .collect();

        Ok(Some(TeamDetails { team, members }))
    }

    /// Gets the user id of the team's leader.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Leader of the team
    /// - `Ok(None)` - Team does not exist (or has no leader row)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_leader_id(&self, team_id: i32) -> Result<Option<i32>, DbErr> {
        let leader = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::IsLeader.eq(true))
            .one(self.db)
            .await?;

        Ok(leader.map(|m| m.user_id))
    }

    pub async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn member_count(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    /// Ids of every team the user belongs to, as leader or member.
    pub async fn team_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TeamMember::find()
            .select_only()
            .column(entity::team_member::Column::TeamId)
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets every team the user belongs to, ordered by id.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Team>, DbErr> {
        let team_ids = self.team_ids_for_user(user_id).await?;
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Updates a team's name, description and capacity.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the team does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateTeamParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Team::update_many()
            .col_expr(entity::team::Column::Name, Expr::value(params.name))
            .col_expr(
                entity::team::Column::Description,
                Expr::value(params.description),
            )
            .col_expr(entity::team::Column::Capacity, Expr::value(params.capacity))
            .filter(entity::team::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a team together with everything it owns.
    ///
    /// Removes, in one transaction: the team's competition registrations, the
    /// applications to its recruitments, the recruitments, the members, then the team.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of team rows deleted (0 when the team does not exist)
    /// - `Err(DbErr)` - Database error, nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::CompetitionRegistration::delete_many()
            .filter(entity::competition_registration::Column::TeamId.eq(id))
            .exec(&txn)
            .await?;

        let recruitment_ids: Vec<i32> = entity::prelude::Recruitment::find()
            .select_only()
            .column(entity::recruitment::Column::Id)
            .filter(entity::recruitment::Column::TeamId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !recruitment_ids.is_empty() {
            entity::prelude::RecruitmentApplication::delete_many()
                .filter(
                    entity::recruitment_application::Column::RecruitmentId.is_in(recruitment_ids),
                )
                .exec(&txn)
                .await?;
        }

        entity::prelude::Recruitment::delete_many()
            .filter(entity::recruitment::Column::TeamId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Team::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}
