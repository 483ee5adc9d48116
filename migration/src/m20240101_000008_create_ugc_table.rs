use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000004_create_app_table::App;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ugc::Table)
                    .if_not_exists()
                    .col(string(Ugc::Id).primary_key())
                    .col(integer(Ugc::AppId))
                    .col(string(Ugc::Name))
                    .col(timestamp_null(Ugc::LastUpdate))
                    .col(timestamp_null(Ugc::LastChecked))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ugc_app_id")
                            .from(Ugc::Table, Ugc::AppId)
                            .to(App::Table, App::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ugc::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ugc {
    Table,
    Id,
    AppId,
    Name,
    LastUpdate,
    LastChecked,
}
