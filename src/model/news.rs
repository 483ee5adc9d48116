use chrono::{DateTime, Utc};

/// The newest news article Steam reports for an app.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    /// Steam's unique article id.
    pub gid: String,
    pub title: String,
    pub url: String,
    pub author: Option<String>,
    pub contents: String,
    pub feed_label: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// A news article already recorded for an app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppNews {
    pub id: i32,
    pub app_id: i32,
    pub gid: String,
    pub title: String,
    pub url: String,
    pub date: DateTime<Utc>,
}

impl AppNews {
    pub fn from_entity(entity: entity::app_news::Model) -> Self {
        Self {
            id: entity.id,
            app_id: entity.app_id,
            gid: entity.gid,
            title: entity.title,
            url: entity.url,
            date: entity.date,
        }
    }
}
