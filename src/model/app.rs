use chrono::{DateTime, Utc};

/// A Steam app with the news state the news poller caches for it.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub id: i32,
    pub name: String,
    pub icon: Option<String>,
    /// `gid` of the newest article already announced.
    pub latest_news: Option<String>,
    pub last_checked_news: Option<DateTime<Utc>>,
}

impl App {
    pub fn from_entity(entity: entity::app::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            icon: entity.icon,
            latest_news: entity.latest_news,
            last_checked_news: entity.last_checked_news,
        }
    }

    /// Icon URL on the Steam CDN, if the app has an icon hash stored.
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_ref().map(|hash| {
            format!(
                "https://cdn.cloudflare.steamstatic.com/steamcommunity/public/images/apps/{}/{}.jpg",
                self.id, hash
            )
        })
    }
}
