use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_currency_table::Currency;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(string(Guild::Id).primary_key())
                    .col(string(Guild::Name))
                    .col(integer(Guild::CurrencyId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_currency_id")
                            .from(Guild::Table, Guild::CurrencyId)
                            .to(Currency::Table, Currency::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    Id,
    Name,
    CurrencyId,
}
