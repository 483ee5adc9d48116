//! Channel webhook factory for creating test webhook registrations.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating channel webhook registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let channel = ChannelWebhookFactory::new(&db, &guild.id)
///     .webhook_id("555")
///     .build()
///     .await?;
/// ```
pub struct ChannelWebhookFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::channel_webhook::Model,
}

impl<'a> ChannelWebhookFactory<'a> {
    /// Creates a new ChannelWebhookFactory with unique channel and webhook ids.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild owning the channel
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::channel_webhook::Model {
                id: format!("{}", 200_000_000_000_000_000u64 + id),
                guild_id: guild_id.into(),
                webhook_id: format!("{}", 300_000_000_000_000_000u64 + id),
                webhook_token: format!("token-{}", id),
            },
        }
    }

    pub fn webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.entity.webhook_id = webhook_id.into();
        self
    }

    pub fn webhook_token(mut self, webhook_token: impl Into<String>) -> Self {
        self.entity.webhook_token = webhook_token.into();
        self
    }

    /// Builds and inserts the channel webhook entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::channel_webhook::Model)` - Created registration
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel_webhook::Model, DbErr> {
        entity::channel_webhook::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            guild_id: ActiveValue::Set(self.entity.guild_id),
            webhook_id: ActiveValue::Set(self.entity.webhook_id),
            webhook_token: ActiveValue::Set(self.entity.webhook_token),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel webhook registration with default values in the given guild.
pub async fn create_channel_webhook(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::channel_webhook::Model, DbErr> {
    ChannelWebhookFactory::new(db, guild_id).build().await
}
