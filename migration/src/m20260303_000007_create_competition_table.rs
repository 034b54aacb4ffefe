use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(pk_auto(Competition::Id))
                    .col(integer(Competition::OwnerId))
                    .col(string(Competition::Name))
                    .col(text(Competition::Description))
                    .col(string(Competition::Contact))
                    .col(boolean(Competition::IsTeam).default(false))
                    .col(boolean(Competition::IsOpen).default(false))
                    .col(integer(Competition::TeamCapacity).default(1))
                    .col(string(Competition::Level))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_owner_id")
                            .from(Competition::Table, Competition::OwnerId)
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
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Competition {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Contact,
    IsTeam,
    IsOpen,
    TeamCapacity,
    Level,
}
