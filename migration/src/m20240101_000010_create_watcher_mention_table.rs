use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000009_create_watcher_table::Watcher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatcherMention::Table)
                    .if_not_exists()
                    .col(pk_auto(WatcherMention::Id))
                    .col(integer(WatcherMention::WatcherId))
                    .col(string(WatcherMention::EntityId))
                    .col(string(WatcherMention::MentionType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_watcher_mention_watcher_id")
                            .from(WatcherMention::Table, WatcherMention::WatcherId)
                            .to(Watcher::Table, Watcher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatcherMention::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WatcherMention {
    Table,
    Id,
    WatcherId,
    EntityId,
    MentionType,
}
