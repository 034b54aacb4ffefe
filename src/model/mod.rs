//! Request and response DTOs exchanged over the HTTP API.
//!
//! These types are pure serde shapes. Server-side domain models convert into them at the
//! controller boundary via `into_dto()`, and request DTOs convert into operation
//! parameters via `from_dto()`.

pub mod api;
pub mod auth;
pub mod competition;
pub mod history;
pub mod recruitment;
pub mod team;
pub mod user;
