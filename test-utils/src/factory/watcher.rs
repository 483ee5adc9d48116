//! Watcher factory for creating test watchers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating watchers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let watcher = WatcherFactory::new(&db, "ugc", app.id, &channel.id)
///     .ugc_id(Some(&ugc.id))
///     .inactive(true)
///     .build()
///     .await?;
/// ```
pub struct WatcherFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::watcher::Model,
}

impl<'a> WatcherFactory<'a> {
    /// Creates a new active WatcherFactory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `watcher_type` - `news`, `price`, `workshop_new`, `workshop_update` or `ugc`
    /// - `app_id` - App the watcher follows
    /// - `channel_id` - Channel notifications are delivered to
    pub fn new(
        db: &'a DatabaseConnection,
        watcher_type: &str,
        app_id: i32,
        channel_id: impl Into<String>,
    ) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::watcher::Model {
                id: 0,
                name: format!("Watcher {}", id),
                watcher_type: watcher_type.to_string(),
                app_id,
                ugc_id: None,
                sub_id: None,
                bundle_id: None,
                channel_id: channel_id.into(),
                inactive: false,
                created_at: Utc::now(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn ugc_id(mut self, ugc_id: Option<&str>) -> Self {
        self.entity.ugc_id = ugc_id.map(str::to_string);
        self
    }

    /// Makes a price watcher follow a package instead of the app.
    pub fn sub_id(mut self, sub_id: Option<i32>) -> Self {
        self.entity.sub_id = sub_id;
        self
    }

    /// Makes a price watcher follow a bundle instead of the app.
    pub fn bundle_id(mut self, bundle_id: Option<i32>) -> Self {
        self.entity.bundle_id = bundle_id;
        self
    }

    pub fn inactive(mut self, inactive: bool) -> Self {
        self.entity.inactive = inactive;
        self
    }

    /// Builds and inserts the watcher entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::watcher::Model)` - Created watcher
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::watcher::Model, DbErr> {
        entity::watcher::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            watcher_type: ActiveValue::Set(self.entity.watcher_type),
            app_id: ActiveValue::Set(self.entity.app_id),
            ugc_id: ActiveValue::Set(self.entity.ugc_id),
            sub_id: ActiveValue::Set(self.entity.sub_id),
            bundle_id: ActiveValue::Set(self.entity.bundle_id),
            channel_id: ActiveValue::Set(self.entity.channel_id),
            inactive: ActiveValue::Set(self.entity.inactive),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active watcher with default values.
pub async fn create_watcher(
    db: &DatabaseConnection,
    watcher_type: &str,
    app_id: i32,
    channel_id: impl Into<String>,
) -> Result<entity::watcher::Model, DbErr> {
    WatcherFactory::new(db, watcher_type, app_id, channel_id)
        .build()
        .await
}
