//! Signed session tokens.
//!
//! Tokens are HS256 JWTs carrying the user id (`sub`), the email, and issue/expiry
//! timestamps. They live for 30 minutes and are not refreshed.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::TokenDto,
    server::error::{auth::AuthError, AppError},
};

/// Lifetime of an issued token in seconds.
pub const TOKEN_LIFETIME_SECS: i64 = 30 * 60;

/// Token type reported alongside every issued token.
pub const TOKEN_TYPE: &str = "Bearer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Builds claims for a user, valid from now for `TOKEN_LIFETIME_SECS`.
    pub fn new(user_id: i32, email: impl Into<String>) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id,
            email: email.into(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        }
    }
}

/// An issued token with its lifetime.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: i64,
}

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self {
            token,
            expires_in: TOKEN_LIFETIME_SECS,
        }
    }

    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.expires_in,
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs and validates session tokens with a shared secret.
///
/// Cloning is cheap; clones share the keys.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
        }
    }

    /// Signs the claims into a compact JWT.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::TokenErr)` - Signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        jsonwebtoken::encode(&Header::default(), claims, &self.keys.encoding)
            .map_err(AppError::TokenErr)
    }

    /// Validates signature and expiry and returns the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is well formed, correctly signed and unexpired
    /// - `Err(AuthError::InvalidToken)` - Any validation failure
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.keys.decoding, &validation)?;

        Ok(data.claims)
    }
}
