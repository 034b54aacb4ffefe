//! Registration, login and token issuance.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, User},
    service::auth::token::{AccessToken, Claims, TokenService},
    util::{db::is_unique_violation, parse::require_text},
};

/// Service for account registration and credential checks.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user with their skills.
    ///
    /// Empty skill names are dropped; the rest are trimmed.
    ///
    /// # Arguments
    /// - `params` - Registration fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Name, email or password empty
    /// - `Err(AppError::AuthErr(DuplicateEmail))` - Email already registered
    /// - `Err(AppError::PasswordHashErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let name = require_text(params.name, "name")?;
        let email = require_text(params.email, "email")?;
        if params.password.is_empty() {
            return Err(AppError::BadRequest("password must not be empty".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo.email_exists(&email).await? {
            return Err(AuthError::DuplicateEmail(email).into());
        }

        let password_hash = password::hash(&params.password)?;

        let skills = params
            .skills
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect();

        let user = repo
            .create(CreateUserParams {
                name,
                email: email.clone(),
                phone: params.phone.trim().to_string(),
                password_hash,
                institution: params.institution.trim().to_string(),
                skills,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::from(AuthError::DuplicateEmail(email))
                } else {
                    err.into()
                }
            })?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - Signed token valid for 30 minutes
    /// - `Err(AppError::BadRequest)` - Email or password empty
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Email unknown or password mismatch
    /// - `Err(AppError::TokenErr)` - Token signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, email: String, password: String) -> Result<AccessToken, AppError> {
        let email = require_text(email, "email")?;
        if password.is_empty() {
            return Err(AppError::BadRequest("password must not be empty".to_string()));
        }

        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(&password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let claims = Claims::new(credentials.id, credentials.email);
        let token = self.tokens.encode(&claims)?;

        Ok(AccessToken::new(token))
    }
}
