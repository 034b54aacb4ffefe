pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_skill_table;
mod m20260301_000003_create_team_table;
mod m20260301_000004_create_team_member_table;
mod m20260302_000005_create_recruitment_table;
mod m20260302_000006_create_recruitment_application_table;
mod m20260303_000007_create_competition_table;
mod m20260303_000008_create_competition_registration_table;
mod m20260304_000009_add_open_application_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_skill_table::Migration),
            Box::new(m20260301_000003_create_team_table::Migration),
            Box::new(m20260301_000004_create_team_member_table::Migration),
            Box::new(m20260302_000005_create_recruitment_table::Migration),
            Box::new(m20260302_000006_create_recruitment_application_table::Migration),
            Box::new(m20260303_000007_create_competition_table::Migration),
            Box::new(m20260303_000008_create_competition_registration_table::Migration),
            Box::new(m20260304_000009_add_open_application_index::Migration),
        ]
    }
}
