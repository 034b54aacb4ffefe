//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! aggregate in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Repositories never decide authorization. Mutations report the number of rows they
//! changed so the service layer can tell `NotFound` and `NoEffect` apart.

pub mod competition;
pub mod history;
pub mod recruitment;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
