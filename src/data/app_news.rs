use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::news::{AppNews, NewsItem};

/// Repository for news articles already announced to watchers.
pub struct AppNewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppNewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether an article with this Steam `gid` has already been recorded.
    ///
    /// # Returns
    /// - `Ok(bool)`: True if the article exists
    /// - `Err(DbErr)`: Database error
    pub async fn exists(&self, gid: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AppNews::find()
            .filter(entity::app_news::Column::Gid.eq(gid))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records a news article for an app.
    ///
    /// # Returns
    /// - `Ok(AppNews)`: The created record
    /// - `Err(DbErr)`: Database error, including a duplicate `gid`
    pub async fn create(&self, app_id: i32, item: &NewsItem) -> Result<AppNews, DbErr> {
        let entity = entity::app_news::ActiveModel {
            app_id: ActiveValue::Set(app_id),
            gid: ActiveValue::Set(item.gid.clone()),
            title: ActiveValue::Set(item.title.clone()),
            url: ActiveValue::Set(item.url.clone()),
            author: ActiveValue::Set(item.author.clone()),
            contents: ActiveValue::Set(item.contents.clone()),
            feed_label: ActiveValue::Set(item.feed_label.clone()),
            date: ActiveValue::Set(item.published_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AppNews::from_entity(entity))
    }

    /// Gets all recorded articles for an app.
    #[cfg(test)]
    pub async fn get_by_app_id(&self, app_id: i32) -> Result<Vec<AppNews>, DbErr> {
        let entities = entity::prelude::AppNews::find()
            .filter(entity::app_news::Column::AppId.eq(app_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AppNews::from_entity).collect())
    }
}
