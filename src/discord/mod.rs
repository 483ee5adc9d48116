//! Discord webhook delivery for queued notifications.
//!
//! The notification queue depends on the [`WebhookSender`] trait only. The Serenity
//! implementation lives in [`webhook`].

pub mod webhook;

use serenity::async_trait;

use crate::{error::webhook::WebhookError, model::notification::QueuedNotification};

/// Display identity the bot posts webhook messages under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub name: String,
    pub avatar_url: Option<String>,
}

#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// Resolves the bot's own display name and avatar.
    async fn identity(&self) -> Result<BotIdentity, WebhookError>;

    /// Posts a queued notification to its destination webhook.
    ///
    /// # Returns
    /// - `Ok(())` - Discord accepted the message
    /// - `Err(WebhookError::UnknownWebhook)` - The webhook no longer exists
    /// - `Err(WebhookError::Server)` - Discord returned a 5xx status
    /// - `Err(WebhookError::Other)` - Any other failure
    async fn send(
        &self,
        notification: &QueuedNotification,
        identity: Option<&BotIdentity>,
    ) -> Result<(), WebhookError>;
}
