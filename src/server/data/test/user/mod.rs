use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod email_exists;
mod find_credentials_by_email;

fn params(email: &str, skills: &[&str]) -> CreateUserParams {
    CreateUserParams {
        name: "Alice".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        password_hash: "hash".to_string(),
        institution: "MIT".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}
