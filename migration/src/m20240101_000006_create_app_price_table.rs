use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000001_create_currency_table::Currency, m20240101_000004_create_app_table::App,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(AppPrice::Id))
                    .col(integer(AppPrice::AppId))
                    .col(string(AppPrice::Kind).default("app"))
                    .col(integer(AppPrice::TargetId))
                    .col(integer(AppPrice::CurrencyId))
                    .col(integer(AppPrice::Price))
                    .col(integer(AppPrice::DiscountedPrice))
                    .col(integer(AppPrice::Discount))
                    .col(timestamp_null(AppPrice::LastChecked))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_price_app_id")
                            .from(AppPrice::Table, AppPrice::AppId)
                            .to(App::Table, App::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_price_currency_id")
                            .from(AppPrice::Table, AppPrice::CurrencyId)
                            .to(Currency::Table, Currency::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One cached price per store entry and currency
        manager
            .create_index(
                Index::create()
                    .name("idx_app_price_unique")
                    .table(AppPrice::Table)
                    .col(AppPrice::Kind)
                    .col(AppPrice::TargetId)
                    .col(AppPrice::CurrencyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_app_price_unique")
                    .table(AppPrice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppPrice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppPrice {
    Table,
    Id,
    AppId,
    Kind,
    TargetId,
    CurrencyId,
    Price,
    DiscountedPrice,
    Discount,
    LastChecked,
}
