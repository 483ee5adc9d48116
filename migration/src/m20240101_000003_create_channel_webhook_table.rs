use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000002_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChannelWebhook::Table)
                    .if_not_exists()
                    .col(string(ChannelWebhook::Id).primary_key())
                    .col(string(ChannelWebhook::GuildId))
                    .col(string_uniq(ChannelWebhook::WebhookId))
                    .col(string(ChannelWebhook::WebhookToken))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_webhook_guild_id")
                            .from(ChannelWebhook::Table, ChannelWebhook::GuildId)
                            .to(Guild::Table, Guild::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChannelWebhook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelWebhook {
    Table,
    Id,
    GuildId,
    WebhookId,
    WebhookToken,
}
