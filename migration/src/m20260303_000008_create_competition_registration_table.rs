use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;
use super::m20260301_000003_create_team_table::Team;
use super::m20260303_000007_create_competition_table::Competition;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompetitionRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(CompetitionRegistration::Id))
                    .col(integer(CompetitionRegistration::CompetitionId))
                    .col(integer_null(CompetitionRegistration::UserId))
                    .col(integer_null(CompetitionRegistration::TeamId))
                    .col(string_len(CompetitionRegistration::Status, 16).default("pending"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_registration_competition_id")
                            .from(
                                CompetitionRegistration::Table,
                                CompetitionRegistration::CompetitionId,
                            )
                            .to(Competition::Table, Competition::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_registration_user_id")
                            .from(CompetitionRegistration::Table, CompetitionRegistration::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_registration_team_id")
                            .from(CompetitionRegistration::Table, CompetitionRegistration::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULLs are distinct in unique indexes, so each index only constrains
        // the registrations of its own kind.
        manager
            .create_index(
                Index::create()
                    .name("idx_competition_registration_user")
                    .table(CompetitionRegistration::Table)
                    .col(CompetitionRegistration::CompetitionId)
                    .col(CompetitionRegistration::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_competition_registration_team")
                    .table(CompetitionRegistration::Table)
                    .col(CompetitionRegistration::CompetitionId)
                    .col(CompetitionRegistration::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CompetitionRegistration::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum CompetitionRegistration {
    Table,
    Id,
    CompetitionId,
    UserId,
    TeamId,
    Status,
}
