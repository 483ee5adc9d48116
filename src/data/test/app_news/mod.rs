use crate::{data::app_news::AppNewsRepository, model::news::NewsItem};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;

fn news_item(gid: &str) -> NewsItem {
    NewsItem {
        gid: gid.to_string(),
        title: "Patch notes".to_string(),
        url: "https://store.steampowered.com/news/1".to_string(),
        author: Some("Valve".to_string()),
        contents: "Fixed things".to_string(),
        feed_label: Some("Community Announcements".to_string()),
        published_at: Utc::now(),
    }
}
