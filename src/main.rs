mod config;
mod data;
mod discord;
mod error;
mod model;
mod scheduler;
mod startup;
mod steam;

use std::sync::Arc;

use crate::{
    config::Config, discord::webhook::SerenityWebhookSender, error::AppError,
    scheduler::Scheduler,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let discord_http = startup::setup_discord_http(&config);
    let steam = startup::setup_steam_client(&config)?;

    if config.steam_api_key.is_none() {
        tracing::warn!("STEAM_API_KEY is not set, workshop polling will fail");
    }

    let mut scheduler = Scheduler::from_config(
        &config,
        db,
        Arc::new(steam),
        Arc::new(SerenityWebhookSender::new(discord_http)),
    );

    tracing::info!("Starting SteamWatch scheduler");
    scheduler.start().await;

    for (name, state) in scheduler.poller_states() {
        tracing::debug!("{} poller is {:?}", name, state);
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    scheduler.stop().await;

    Ok(())
}
