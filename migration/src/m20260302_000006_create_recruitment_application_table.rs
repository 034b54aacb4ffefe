use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;
use super::m20260302_000005_create_recruitment_table::Recruitment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecruitmentApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(RecruitmentApplication::Id))
                    .col(integer(RecruitmentApplication::RecruitmentId))
                    .col(integer(RecruitmentApplication::UserId))
                    .col(string_len(RecruitmentApplication::Status, 16).default("pending"))
                    .col(boolean(RecruitmentApplication::IsOpen).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recruitment_application_recruitment_id")
                            .from(
                                RecruitmentApplication::Table,
                                RecruitmentApplication::RecruitmentId,
                            )
                            .to(Recruitment::Table, Recruitment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recruitment_application_user_id")
                            .from(RecruitmentApplication::Table, RecruitmentApplication::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(RecruitmentApplication::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecruitmentApplication {
    Table,
    Id,
    RecruitmentId,
    UserId,
    Status,
    IsOpen,
}
