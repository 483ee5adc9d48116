pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_currency_table;
mod m20240101_000002_create_guild_table;
mod m20240101_000003_create_channel_webhook_table;
mod m20240101_000004_create_app_table;
mod m20240101_000005_create_app_news_table;
mod m20240101_000006_create_app_price_table;
mod m20240101_000007_create_app_workshop_table;
mod m20240101_000008_create_ugc_table;
mod m20240101_000009_create_watcher_table;
mod m20240101_000010_create_watcher_mention_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_currency_table::Migration),
            Box::new(m20240101_000002_create_guild_table::Migration),
            Box::new(m20240101_000003_create_channel_webhook_table::Migration),
            Box::new(m20240101_000004_create_app_table::Migration),
            Box::new(m20240101_000005_create_app_news_table::Migration),
            Box::new(m20240101_000006_create_app_price_table::Migration),
            Box::new(m20240101_000007_create_app_workshop_table::Migration),
            Box::new(m20240101_000008_create_ugc_table::Migration),
            Box::new(m20240101_000009_create_watcher_table::Migration),
            Box::new(m20240101_000010_create_watcher_mention_table::Migration),
        ]
    }
}
