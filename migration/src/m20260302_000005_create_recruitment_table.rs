use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recruitment::Table)
                    .if_not_exists()
                    .col(pk_auto(Recruitment::Id))
                    .col(integer(Recruitment::TeamId))
                    .col(string(Recruitment::Role))
                    .col(text(Recruitment::Description))
                    .col(boolean(Recruitment::IsOpen).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recruitment_team_id")
                            .from(Recruitment::Table, Recruitment::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recruitment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recruitment {
    Table,
    Id,
    TeamId,
    Role,
    Description,
    IsOpen,
}
