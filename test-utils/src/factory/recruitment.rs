//! Recruitment factory for creating test recruitment postings.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recruitments attached to an existing team.
pub struct RecruitmentFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    role: String,
    description: String,
    is_open: bool,
}

impl<'a> RecruitmentFactory<'a> {
    /// Creates a new RecruitmentFactory with default values.
    ///
    /// Defaults:
    /// - role: `"Role {n}"`
    /// - description: `"Looking for a teammate"`
    /// - is_open: `false`
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        Self {
            db,
            team_id,
            role: format!("Role {}", next_id()),
            description: "Looking for a teammate".to_string(),
            is_open: false,
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Builds and inserts the recruitment entity into the database.
    pub async fn build(self) -> Result<entity::recruitment::Model, DbErr> {
        entity::recruitment::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            role: ActiveValue::Set(self.role),
            description: ActiveValue::Set(self.description),
            is_open: ActiveValue::Set(self.is_open),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a closed recruitment with default values for `team_id`.
pub async fn create_recruitment(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::recruitment::Model, DbErr> {
    RecruitmentFactory::new(db, team_id).build().await
}

/// Creates a pending, open application from `user_id` to `recruitment_id`.
pub async fn create_application(
    db: &DatabaseConnection,
    recruitment_id: i32,
    user_id: i32,
) -> Result<entity::recruitment_application::Model, DbErr> {
    entity::recruitment_application::ActiveModel {
        recruitment_id: ActiveValue::Set(recruitment_id),
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set("pending".to_string()),
        is_open: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
