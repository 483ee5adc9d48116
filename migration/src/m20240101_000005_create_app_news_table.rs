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
                    .table(AppNews::Table)
                    .if_not_exists()
                    .col(pk_auto(AppNews::Id))
                    .col(integer(AppNews::AppId))
                    .col(string_uniq(AppNews::Gid))
                    .col(string(AppNews::Title))
                    .col(string(AppNews::Url))
                    .col(string_null(AppNews::Author))
                    .col(text(AppNews::Contents))
                    .col(string_null(AppNews::FeedLabel))
                    .col(timestamp(AppNews::Date))
                    .col(
                        timestamp(AppNews::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_news_app_id")
                            .from(AppNews::Table, AppNews::AppId)
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
                    .name("idx_app_news_app_id")
                    .table(AppNews::Table)
                    .col(AppNews::AppId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_app_news_app_id")
                    .table(AppNews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppNews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppNews {
    Table,
    Id,
    AppId,
    Gid,
    Title,
    Url,
    Author,
    Contents,
    FeedLabel,
    Date,
    CreatedAt,
}
