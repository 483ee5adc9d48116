//! App news factory for creating recorded news articles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a recorded news article for an app.
///
/// # Arguments
/// - `db` - Database connection
/// - `app_id` - App the article belongs to
/// - `gid` - Steam article id
///
/// # Returns
/// - `Ok(entity::app_news::Model)` - Created article
/// - `Err(DbErr)` - Database error during insert
pub async fn create_app_news(
    db: &DatabaseConnection,
    app_id: i32,
    gid: impl Into<String>,
) -> Result<entity::app_news::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::app_news::ActiveModel {
        id: ActiveValue::NotSet,
        app_id: ActiveValue::Set(app_id),
        gid: ActiveValue::Set(gid.into()),
        title: ActiveValue::Set(format!("News {}", id)),
        url: ActiveValue::Set(format!("https://store.steampowered.com/news/{}", id)),
        author: ActiveValue::Set(None),
        contents: ActiveValue::Set(String::new()),
        feed_label: ActiveValue::Set(None),
        date: ActiveValue::Set(now),
        created_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
