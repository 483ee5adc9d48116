//! UGC factory for creating watched workshop items.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating UGC items with customizable fields.
pub struct UgcFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::ugc::Model,
}

impl<'a> UgcFactory<'a> {
    /// Creates a new UgcFactory with a unique published file id.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `app_id` - App the item belongs to
    pub fn new(db: &'a DatabaseConnection, app_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::ugc::Model {
                id: format!("{}", 1_000_000_000 + id),
                app_id,
                name: format!("Item {}", id),
                last_update: None,
                last_checked: None,
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn last_update(mut self, updated: Option<DateTime<Utc>>) -> Self {
        self.entity.last_update = updated;
        self
    }

    pub fn last_checked(mut self, checked: Option<DateTime<Utc>>) -> Self {
        self.entity.last_checked = checked;
        self
    }

    /// Builds and inserts the UGC entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ugc::Model)` - Created item
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ugc::Model, DbErr> {
        entity::ugc::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            app_id: ActiveValue::Set(self.entity.app_id),
            name: ActiveValue::Set(self.entity.name),
            last_update: ActiveValue::Set(self.entity.last_update),
            last_checked: ActiveValue::Set(self.entity.last_checked),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a never-checked UGC item with default values.
pub async fn create_ugc(db: &DatabaseConnection, app_id: i32) -> Result<entity::ugc::Model, DbErr> {
    UgcFactory::new(db, app_id).build().await
}
