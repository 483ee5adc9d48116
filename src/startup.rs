use std::{sync::Arc, time::Duration};

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{steam::SteamError, AppError},
    steam::client::SteamClient,
};

/// Installs the global tracing subscriber.
///
/// Log levels are read from `RUST_LOG`, defaulting to `info` for the whole process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before any poller can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the Discord HTTP client used for webhook delivery and bot identity lookups.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_token))
}

/// Builds the Steam Web API client with the configured request timeout.
///
/// # Returns
/// - `Ok(SteamClient)` - Client ready for use by the pollers
/// - `Err(AppError::SteamErr)` - The underlying reqwest client could not be built
pub fn setup_steam_client(config: &Config) -> Result<SteamClient, AppError> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.steam_http_timeout_secs))
        .user_agent(concat!("steamwatch/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(SteamError::Request)?;

    Ok(SteamClient::new(http, config.steam_api_key.clone()))
}
