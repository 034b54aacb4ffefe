//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their skills.
//! Users are created once at registration and never updated, so the repository only
//! exposes creation and lookups.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::user::{CreateUserParams, User, UserCredentials};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user and their skills in one transaction.
    ///
    /// # Arguments
    /// - `params` - User fields with the already hashed password and skill names
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with skills
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            institution: ActiveValue::Set(params.institution),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut skills = Vec::with_capacity(params.skills.len());
        for name in params.skills {
            let skill = entity::skill::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                name: ActiveValue::Set(name),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            skills.push(skill);
        }

        txn.commit().await?;

        Ok(User::from_entity(user, skills))
    }

    /// Finds a user by id together with their skills.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let skills = entity::prelude::Skill::find()
            .filter(entity::skill::Column::UserId.eq(id))
            .order_by_asc(entity::skill::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(User::from_entity(user, skills)))
    }

    /// Finds the stored credentials for an email.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - A user is registered with that email
    /// - `Ok(None)` - Email unknown
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(UserCredentials::from_entity))
    }

    /// Checks whether a user is registered with the given email.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
