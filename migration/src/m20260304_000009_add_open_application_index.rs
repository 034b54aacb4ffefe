use sea_orm_migration::{prelude::*, sea_orm::ConnectionTrait};

#[derive(DeriveMigrationName)]
pub struct Migration;

// The schema builder has no partial index support; SQLite and PostgreSQL share this syntax.
const CREATE_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS idx_recruitment_application_open \
     ON recruitment_application (recruitment_id, user_id) WHERE is_open";

const DROP_INDEX: &str = "DROP INDEX IF EXISTS idx_recruitment_application_open";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// At most one open application per applicant and recruitment; closed ones are history.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DROP_INDEX)
            .await?;

        Ok(())
    }
}
