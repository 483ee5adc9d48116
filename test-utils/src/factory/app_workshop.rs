//! App workshop factory for creating cached workshop listing heads.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating cached workshop listings with customizable fields.
pub struct AppWorkshopFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::app_workshop::Model,
}

impl<'a> AppWorkshopFactory<'a> {
    /// Creates a new AppWorkshopFactory for an empty, never-checked listing.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `app_id` - App whose workshop is listed
    /// - `listing` - `"new"` or `"update"`
    pub fn new(db: &'a DatabaseConnection, app_id: i32, listing: &str) -> Self {
        Self {
            db,
            entity: entity::app_workshop::Model {
                id: 0,
                app_id,
                listing: listing.to_string(),
                latest_file_id: None,
                latest_time: None,
                last_checked: None,
            },
        }
    }

    /// Sets the cached head of the listing.
    pub fn latest(mut self, file_id: &str, time: DateTime<Utc>) -> Self {
        self.entity.latest_file_id = Some(file_id.to_string());
        self.entity.latest_time = Some(time);
        self
    }

    pub fn last_checked(mut self, checked: Option<DateTime<Utc>>) -> Self {
        self.entity.last_checked = checked;
        self
    }

    /// Builds and inserts the workshop listing into the database.
    ///
    /// # Returns
    /// - `Ok(entity::app_workshop::Model)` - Created listing row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::app_workshop::Model, DbErr> {
        entity::app_workshop::ActiveModel {
            id: ActiveValue::NotSet,
            app_id: ActiveValue::Set(self.entity.app_id),
            listing: ActiveValue::Set(self.entity.listing),
            latest_file_id: ActiveValue::Set(self.entity.latest_file_id),
            latest_time: ActiveValue::Set(self.entity.latest_time),
            last_checked: ActiveValue::Set(self.entity.last_checked),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty, never-checked workshop listing.
pub async fn create_app_workshop(
    db: &DatabaseConnection,
    app_id: i32,
    listing: &str,
) -> Result<entity::app_workshop::Model, DbErr> {
    AppWorkshopFactory::new(db, app_id, listing).build().await
}
