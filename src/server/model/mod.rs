//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod competition;
pub mod history;
pub mod recruitment;
pub mod status;
pub mod team;
pub mod user;
