//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Authorization**: Checking the requester owns (or leads) the resource before mutating
//! - **Validation**: Rejecting empty names and out-of-range capacities
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Converting entity rows to domain models and classifying outcomes
//!
//! The requesting user's id is always an explicit parameter; services never read it from
//! ambient request state.

pub mod auth;
pub mod competition;
pub mod history;
pub mod recruitment;
pub mod team;
pub mod user;
