//! SeaORM entity definitions for the SteamWatch database.

pub mod prelude;

pub mod app;
pub mod app_news;
pub mod app_price;
pub mod app_workshop;
pub mod channel_webhook;
pub mod currency;
pub mod guild;
pub mod ugc;
pub mod watcher;
pub mod watcher_mention;
