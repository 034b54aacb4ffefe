//! JSON body extractor whose rejections use the response envelope.

use axum::{
    extract::{FromRequest, OptionalFromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Drop-in for `axum::Json` that rejects malformed bodies with `AppError::BadRequest`.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;

        Ok(Self(value))
    }
}

/// An absent body (no `Content-Type`) yields `None`; a present but invalid one is rejected.
impl<T, S> OptionalFromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let value = <Json<T> as OptionalFromRequest<S>>::from_request(req, state).await?;

        Ok(value.map(|Json(value)| Self(value)))
    }
}
