//! Watcher mention factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a role or user mention to a watcher.
///
/// # Arguments
/// - `db` - Database connection
/// - `watcher_id` - Watcher pinging the mention
/// - `entity_id` - Discord role or user id
/// - `mention_type` - `"role"` or `"user"`
///
/// # Returns
/// - `Ok(entity::watcher_mention::Model)` - Created mention
/// - `Err(DbErr)` - Database error during insert
pub async fn create_mention(
    db: &DatabaseConnection,
    watcher_id: i32,
    entity_id: impl Into<String>,
    mention_type: &str,
) -> Result<entity::watcher_mention::Model, DbErr> {
    entity::watcher_mention::ActiveModel {
        id: ActiveValue::NotSet,
        watcher_id: ActiveValue::Set(watcher_id),
        entity_id: ActiveValue::Set(entity_id.into()),
        mention_type: ActiveValue::Set(mention_type.to_string()),
    }
    .insert(db)
    .await
}
