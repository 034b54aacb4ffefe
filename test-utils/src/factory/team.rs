//! Team factory for creating test teams together with their leader membership.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams.
///
/// Every built team gets exactly one member row for `leader_id` with `is_leader = true`,
/// matching what the team service does on creation.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db, leader.id)
///     .name("Alpha")
///     .capacity(4)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    leader_id: i32,
    name: String,
    description: String,
    capacity: i32,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {n}"`
    /// - description: `"A test team"`
    /// - capacity: `4`
    pub fn new(db: &'a DatabaseConnection, leader_id: i32) -> Self {
        Self {
            db,
            leader_id,
            name: format!("Team {}", next_id()),
            description: "A test team".to_string(),
            capacity: 4,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the team and its leader membership.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            capacity: ActiveValue::Set(self.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            user_id: ActiveValue::Set(self.leader_id),
            is_leader: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(team)
    }
}

/// Creates a team with default values led by `leader_id`.
pub async fn create_team(
    db: &DatabaseConnection,
    leader_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, leader_id).build().await
}

/// Adds a non-leader member to an existing team.
pub async fn add_member(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_member::Model, DbErr> {
    entity::team_member::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        user_id: ActiveValue::Set(user_id),
        is_leader: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}
