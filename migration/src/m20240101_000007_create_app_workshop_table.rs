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
                    .table(AppWorkshop::Table)
                    .if_not_exists()
                    .col(pk_auto(AppWorkshop::Id))
                    .col(integer(AppWorkshop::AppId))
                    .col(string(AppWorkshop::Listing))
                    .col(string_null(AppWorkshop::LatestFileId))
                    .col(timestamp_null(AppWorkshop::LatestTime))
                    .col(timestamp_null(AppWorkshop::LastChecked))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_workshop_app_id")
                            .from(AppWorkshop::Table, AppWorkshop::AppId)
                            .to(App::Table, App::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_app_workshop_unique")
                    .table(AppWorkshop::Table)
                    .col(AppWorkshop::AppId)
                    .col(AppWorkshop::Listing)
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
                    .name("idx_app_workshop_unique")
                    .table(AppWorkshop::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppWorkshop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppWorkshop {
    Table,
    Id,
    AppId,
    Listing,
    LatestFileId,
    LatestTime,
    LastChecked,
}
