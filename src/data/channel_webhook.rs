use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::data::watcher::WatcherRepository;

/// Repository for the webhook registered in each notification channel.
pub struct ChannelWebhookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelWebhookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Removes a webhook registration that Discord reports as deleted.
    ///
    /// Deletes every watcher bound to the webhook's channel (with their mentions) and then
    /// the channel registration itself, so pollers stop producing notifications for it.
    ///
    /// # Arguments
    /// - `webhook_id`: Discord webhook id of the dead destination
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of channel registrations deleted (0 if already purged)
    /// - `Err(DbErr)`: Database error
    pub async fn purge_by_webhook_id(&self, webhook_id: &str) -> Result<u64, DbErr> {
        let channels = entity::prelude::ChannelWebhook::find()
            .filter(entity::channel_webhook::Column::WebhookId.eq(webhook_id))
            .all(self.db)
            .await?;

        if channels.is_empty() {
            return Ok(0);
        }

        let channel_ids: Vec<String> = channels.into_iter().map(|c| c.id).collect();

        let watcher_ids: Vec<i32> = entity::prelude::Watcher::find()
            .filter(entity::watcher::Column::ChannelId.is_in(channel_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|w| w.id)
            .collect();

        WatcherRepository::new(self.db)
            .delete_many(watcher_ids)
            .await?;

        let result = entity::prelude::ChannelWebhook::delete_many()
            .filter(entity::channel_webhook::Column::Id.is_in(channel_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
