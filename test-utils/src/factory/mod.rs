//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through SeaORM active models,
//! bypassing the application's services, so tests can set up state the public API would
//! reject (for example a team that is already over capacity).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a team led by that user
//!     let team = factory::team::create_team(&db, user.id).await?;
//!
//!     // Create a team with a leader and a recruitment in one call
//!     let (leader, team, recruitment) =
//!         factory::helpers::create_recruitment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("alice@example.com")
//!     .name("Alice")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `team` - Create team entities with their leader membership
//! - `recruitment` - Create recruitment postings
//! - `competition` - Create competitions
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod competition;
pub mod helpers;
pub mod recruitment;
pub mod team;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use competition::create_competition;
pub use recruitment::create_recruitment;
pub use team::{add_member, create_team};
pub use user::create_user;
