//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including ID
//! generation and convenience methods for creating entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a currency, a guild using it and a channel webhook registration in that guild.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((currency, guild, channel))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_channel_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::currency::Model,
        entity::guild::Model,
        entity::channel_webhook::Model,
    ),
    DbErr,
> {
    let currency = crate::factory::currency::create_currency(db).await?;
    let guild = crate::factory::guild::create_guild(db, currency.id).await?;
    let channel = crate::factory::channel_webhook::create_channel_webhook(db, &guild.id).await?;

    Ok((currency, guild, channel))
}

/// Creates a guild using an existing currency together with a channel registration.
///
/// # Returns
/// - `Ok((guild, channel))` - Created guild and channel
/// - `Err(DbErr)` - Database error during creation
pub async fn create_channel_for_currency(
    db: &DatabaseConnection,
    currency_id: i32,
) -> Result<(entity::guild::Model, entity::channel_webhook::Model), DbErr> {
    let guild = crate::factory::guild::create_guild(db, currency_id).await?;
    let channel = crate::factory::channel_webhook::create_channel_webhook(db, &guild.id).await?;

    Ok((guild, channel))
}
