//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (currency, guild, channel) = factory::helpers::create_channel_with_dependencies(&db).await?;
//! let app = factory::create_app(&db).await?;
//! let watcher = factory::create_watcher(&db, "news", app.id, &channel.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::app_price::AppPriceFactory;
//!
//! let price = AppPriceFactory::new(&db, app.id, currency.id)
//!     .price(1000, 20, 800)
//!     .last_checked(Some(Utc::now()))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `currency` - Currencies
//! - `guild` - Guilds with a preferred currency
//! - `channel_webhook` - Channel webhook registrations
//! - `app` - Steam apps
//! - `app_news` - Recorded news articles
//! - `app_price` - Cached app prices per currency
//! - `app_workshop` - Cached workshop listing heads
//! - `ugc` - Watched UGC items
//! - `watcher` - Watchers
//! - `watcher_mention` - Watcher role/user mentions
//! - `helpers` - ID generation and entities with dependencies

pub mod app;
pub mod app_news;
pub mod app_price;
pub mod app_workshop;
pub mod channel_webhook;
pub mod currency;
pub mod guild;
pub mod helpers;
pub mod ugc;
pub mod watcher;
pub mod watcher_mention;

pub use app::create_app;
pub use app_news::create_app_news;
pub use app_price::create_app_price;
pub use app_workshop::create_app_workshop;
pub use channel_webhook::create_channel_webhook;
pub use currency::create_currency;
pub use guild::create_guild;
pub use ugc::create_ugc;
pub use watcher::create_watcher;
pub use watcher_mention::create_mention;
