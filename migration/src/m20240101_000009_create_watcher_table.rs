use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000003_create_channel_webhook_table::ChannelWebhook,
    m20240101_000004_create_app_table::App, m20240101_000008_create_ugc_table::Ugc,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Watcher::Table)
                    .if_not_exists()
                    .col(pk_auto(Watcher::Id))
                    .col(string(Watcher::Name))
                    .col(string(Watcher::WatcherType))
                    .col(integer(Watcher::AppId))
                    .col(string_null(Watcher::UgcId))
                    .col(integer_null(Watcher::SubId))
                    .col(integer_null(Watcher::BundleId))
                    .col(string(Watcher::ChannelId))
                    .col(boolean(Watcher::Inactive).default(false))
                    .col(
                        timestamp(Watcher::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watcher_app_id")
                            .from(Watcher::Table, Watcher::AppId)
                            .to(App::Table, App::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watcher_ugc_id")
                            .from(Watcher::Table, Watcher::UgcId)
                            .to(Ugc::Table, Ugc::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watcher_channel_id")
                            .from(Watcher::Table, Watcher::ChannelId)
                            .to(ChannelWebhook::Table, ChannelWebhook::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Pollers look watchers up by entity and type every cycle
        manager
            .create_index(
                Index::create()
                    .name("idx_watcher_app_id_type")
                    .table(Watcher::Table)
                    .col(Watcher::AppId)
                    .col(Watcher::WatcherType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_watcher_app_id_type")
                    .table(Watcher::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Watcher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Watcher {
    Table,
    Id,
    Name,
    WatcherType,
    AppId,
    UgcId,
    SubId,
    BundleId,
    ChannelId,
    Inactive,
    CreatedAt,
}
