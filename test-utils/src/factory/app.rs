//! App factory for creating test Steam app entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test apps with customizable fields.
///
/// Apps default to never having been checked for news.
///
/// # Example
///
/// ```rust,ignore
/// let app = AppFactory::new(&db)
///     .id(440)
///     .latest_news(Some("123"))
///     .last_checked_news(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct AppFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::app::Model,
}

impl<'a> AppFactory<'a> {
    /// Creates a new AppFactory with a unique app id.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i32;

        Self {
            db,
            entity: entity::app::Model {
                id,
                name: format!("App {}", id),
                icon: None,
                latest_news: None,
                last_checked_news: None,
            },
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn icon(mut self, icon: Option<&str>) -> Self {
        self.entity.icon = icon.map(str::to_string);
        self
    }

    /// Sets the gid of the newest announced article.
    pub fn latest_news(mut self, gid: Option<&str>) -> Self {
        self.entity.latest_news = gid.map(str::to_string);
        self
    }

    pub fn last_checked_news(mut self, checked: Option<DateTime<Utc>>) -> Self {
        self.entity.last_checked_news = checked;
        self
    }

    /// Builds and inserts the app entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::app::Model)` - Created app entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::app::Model, DbErr> {
        entity::app::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            icon: ActiveValue::Set(self.entity.icon),
            latest_news: ActiveValue::Set(self.entity.latest_news),
            last_checked_news: ActiveValue::Set(self.entity.last_checked_news),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an app with default values.
pub async fn create_app(db: &DatabaseConnection) -> Result<entity::app::Model, DbErr> {
    AppFactory::new(db).build().await
}
