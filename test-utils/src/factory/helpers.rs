//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique emails and names across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team led by a freshly created user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((leader, team))` - The leader user and the created team
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_leader(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::team::Model), DbErr> {
    let leader = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::create_team(db, leader.id).await?;

    Ok((leader, team))
}

/// Creates a recruitment hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as team leader)
/// 2. Team led by that user
/// 3. Recruitment for the team (open for applications)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((leader, team, recruitment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_recruitment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::recruitment::Model,
    ),
    DbErr,
> {
    let (leader, team) = create_team_with_leader(db).await?;
    let recruitment = crate::factory::recruitment::RecruitmentFactory::new(db, team.id)
        .open(true)
        .build()
        .await?;

    Ok((leader, team, recruitment))
}

/// Creates a competition owned by a freshly created user.
///
/// # Arguments
/// - `db` - Database connection
/// - `is_team` - Whether the competition accepts team registrations
///
/// # Returns
/// - `Ok((owner, competition))` - The owner and the created open competition
/// - `Err(DbErr)` - Database error during creation
pub async fn create_competition_with_owner(
    db: &DatabaseConnection,
    is_team: bool,
) -> Result<(entity::user::Model, entity::competition::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let competition = crate::factory::competition::CompetitionFactory::new(db, owner.id)
        .is_team(is_team)
        .open(true)
        .build()
        .await?;

    Ok((owner, competition))
}
