//! SteamWatch Test Utils
//!
//! Provides shared testing utilities for the SteamWatch scheduler. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases and factories
//! that insert watched entities, watchers and their webhook registrations with sensible
//! defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Per-table factories for inserting test rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_price_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_watcher_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (currency, _guild, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
//!     let app = factory::create_app(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
