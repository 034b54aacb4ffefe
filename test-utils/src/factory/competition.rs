//! Competition factory for creating test competitions.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test competitions owned by an existing user.
///
/// # Example
///
/// ```rust,ignore
/// let competition = CompetitionFactory::new(&db, owner.id)
///     .is_team(true)
///     .team_capacity(3)
///     .open(true)
///     .build()
///     .await?;
/// ```
pub struct CompetitionFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    is_team: bool,
    is_open: bool,
    team_capacity: i32,
    level: String,
}

impl<'a> CompetitionFactory<'a> {
    /// Creates a new CompetitionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Competition {n}"`
    /// - is_team: `false`
    /// - is_open: `false`
    /// - team_capacity: `4`
    /// - level: `"national"`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Competition {}", next_id()),
            is_team: false,
            is_open: false,
            team_capacity: 4,
            level: "national".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_team(mut self, is_team: bool) -> Self {
        self.is_team = is_team;
        self
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn team_capacity(mut self, team_capacity: i32) -> Self {
        self.team_capacity = team_capacity;
        self
    }

    /// Builds and inserts the competition entity into the database.
    pub async fn build(self) -> Result<entity::competition::Model, DbErr> {
        entity::competition::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("A test competition".to_string()),
            contact: ActiveValue::Set("organizer@example.com".to_string()),
            is_team: ActiveValue::Set(self.is_team),
            is_open: ActiveValue::Set(self.is_open),
            team_capacity: ActiveValue::Set(self.team_capacity),
            level: ActiveValue::Set(self.level),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a closed individual competition with default values.
pub async fn create_competition(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::competition::Model, DbErr> {
    CompetitionFactory::new(db, owner_id).build().await
}

/// Creates a registration with the given status for a user or a team.
///
/// Exactly one of `user_id` / `team_id` should be set, matching the competition's
/// team flag; the factory does not check this.
pub async fn create_registration(
    db: &DatabaseConnection,
    competition_id: i32,
    user_id: Option<i32>,
    team_id: Option<i32>,
    status: &str,
) -> Result<entity::competition_registration::Model, DbErr> {
    entity::competition_registration::ActiveModel {
        competition_id: ActiveValue::Set(competition_id),
        user_id: ActiveValue::Set(user_id),
        team_id: ActiveValue::Set(team_id),
        status: ActiveValue::Set(status.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a pending individual registration.
pub async fn create_user_registration(
    db: &DatabaseConnection,
    competition_id: i32,
    user_id: i32,
) -> Result<entity::competition_registration::Model, DbErr> {
    create_registration(db, competition_id, Some(user_id), None, "pending").await
}

/// Creates a pending team registration.
pub async fn create_team_registration(
    db: &DatabaseConnection,
    competition_id: i32,
    team_id: i32,
) -> Result<entity::competition_registration::Model, DbErr> {
    create_registration(db, competition_id, None, Some(team_id), "pending").await
}
