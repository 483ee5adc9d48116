use thiserror::Error;

/// Discord JSON error code for a webhook that no longer exists.
pub const UNKNOWN_WEBHOOK_CODE: isize = 10015;

/// Failures delivering a queued notification to a Discord webhook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The webhook has been deleted; the destination will never accept messages again.
    #[error("Unknown webhook")]
    UnknownWebhook,

    /// Discord answered with a 5xx status, indicating a server-side outage.
    #[error("Discord server error (status {0})")]
    Server(u16),

    /// Any other failure, including rate limits and network errors.
    #[error("{0}")]
    Other(String),
}

impl WebhookError {
    /// Classifies a Serenity error into the queue's retry categories.
    ///
    /// # Arguments
    /// - `err` - Error returned by a Serenity webhook call
    ///
    /// # Returns
    /// - `WebhookError::UnknownWebhook` - Discord error code 10015 or a 404 response
    /// - `WebhookError::Server` - Any 5xx response
    /// - `WebhookError::Other` - Everything else
    pub fn from_serenity(err: &serenity::Error) -> Self {
        use serenity::http::HttpError;

        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = err {
            let status = response.status_code.as_u16();

            if response.error.code == UNKNOWN_WEBHOOK_CODE || status == 404 {
                return WebhookError::UnknownWebhook;
            }

            if (500..600).contains(&status) {
                return WebhookError::Server(status);
            }
        }

        WebhookError::Other(err.to_string())
    }

    /// Whether the failure looks like a Discord outage that warrants a long backoff.
    pub fn is_server_error(&self) -> bool {
        matches!(self, WebhookError::Server(_))
    }
}
