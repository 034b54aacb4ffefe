//! User domain models and parameters.
//!
//! Provides domain models for registered users and their skills, plus the parameter
//! types used when registering a new account.

use crate::model::{
    auth::RegisterDto,
    user::{SkillDto, UserDto},
};

/// Skill listed by a user at registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: i32,
    pub name: String,
}

impl Skill {
    pub fn from_entity(entity: entity::skill::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SkillDto {
        SkillDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Registered user with their skills.
///
/// The password hash is absent; it only leaves the data layer as `UserCredentials`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub institution: String,
    pub skills: Vec<Skill>,
}

impl User {
    /// Converts an entity model and its skill rows to a user domain model at the
    /// repository boundary.
    pub fn from_entity(entity: entity::user::Model, skills: Vec<entity::skill::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            institution: entity.institution,
            skills: skills.into_iter().map(Skill::from_entity).collect(),
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            institution: self.institution,
            skills: self.skills.into_iter().map(Skill::into_dto).collect(),
        }
    }
}

/// Stored credentials looked up during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
        }
    }
}

/// Parameters for registering a new user.
///
/// `password` is plaintext here; the auth service hashes it before building
/// `CreateUserParams`.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub institution: String,
    pub skills: Vec<String>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            password: dto.password,
            institution: dto.institution,
            skills: dto.skills,
        }
    }
}

/// Parameters for inserting a user row with an already hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub institution: String,
    pub skills: Vec<String>,
}
