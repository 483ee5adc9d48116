//! Error types for the SteamWatch scheduler.
//!
//! `AppError` is the top-level error type that wraps the domain-specific errors of each
//! collaborator (configuration, Steam Web API, Discord webhooks, queue snapshots) together
//! with the database and I/O errors raised along the way. Pollers and the notification
//! queue log these errors rather than propagating them out of their loops; only startup
//! failures reach `main`.

pub mod config;
pub mod snapshot;
pub mod steam;
pub mod webhook;

use thiserror::Error;

use crate::error::{
    config::ConfigError, snapshot::SnapshotError, steam::SteamError, webhook::WebhookError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion so `?` can be used
/// throughout the repositories, pollers and startup code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Steam Web API request failed or returned an unusable payload.
    #[error(transparent)]
    SteamErr(#[from] SteamError),

    /// Webhook delivery failed.
    #[error(transparent)]
    WebhookErr(#[from] WebhookError),

    /// Reading or writing the queue snapshot failed.
    #[error(transparent)]
    SnapshotErr(#[from] SnapshotError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal error with custom message, indicating unexpected data or a bug.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
