use std::sync::Arc;

use serenity::{
    all::{CreateEmbed, CreateEmbedFooter, ExecuteWebhook, Timestamp, WebhookId},
    async_trait,
    http::Http,
};

use super::{BotIdentity, WebhookSender};
use crate::{
    error::webhook::WebhookError,
    model::notification::{NotificationEmbed, QueuedNotification},
};

/// Delivers notifications through Discord's webhook API using Serenity.
pub struct SerenityWebhookSender {
    http: Arc<Http>,
}

impl SerenityWebhookSender {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WebhookSender for SerenityWebhookSender {
    async fn identity(&self) -> Result<BotIdentity, WebhookError> {
        let user = self
            .http
            .get_current_user()
            .await
            .map_err(|e| WebhookError::from_serenity(&e))?;

        Ok(BotIdentity {
            name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
            avatar_url: user.avatar_url(),
        })
    }

    async fn send(
        &self,
        notification: &QueuedNotification,
        identity: Option<&BotIdentity>,
    ) -> Result<(), WebhookError> {
        // A malformed id can never be delivered to
        let webhook_id = notification
            .destination_id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(WebhookId::new)
            .ok_or(WebhookError::UnknownWebhook)?;

        let mut builder = ExecuteWebhook::new().embeds(
            notification
                .message
                .embeds
                .iter()
                .map(build_embed)
                .collect(),
        );

        if let Some(content) = &notification.message.content {
            builder = builder.content(content);
        }

        if let Some(identity) = identity {
            builder = builder.username(&identity.name);
            if let Some(avatar_url) = &identity.avatar_url {
                builder = builder.avatar_url(avatar_url);
            }
        }

        self.http
            .execute_webhook(
                webhook_id,
                None,
                &notification.destination_token,
                false,
                Vec::new(),
                &builder,
            )
            .await
            .map_err(|e| WebhookError::from_serenity(&e))?;

        Ok(())
    }
}

/// Converts a stored embed into a Serenity embed builder.
fn build_embed(embed: &NotificationEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();

    if let Some(title) = &embed.title {
        builder = builder.title(title);
    }
    if let Some(description) = &embed.description {
        builder = builder.description(description);
    }
    if let Some(url) = &embed.url {
        builder = builder.url(url);
    }
    if let Some(color) = embed.color {
        builder = builder.color(color);
    }
    if let Some(thumbnail) = &embed.thumbnail {
        builder = builder.thumbnail(thumbnail);
    }
    if let Some(image) = &embed.image {
        builder = builder.image(image);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(timestamp) = embed
        .timestamp
        .and_then(|t| Timestamp::from_unix_timestamp(t.timestamp()).ok())
    {
        builder = builder.timestamp(timestamp);
    }

    builder
}
