/// The kind of Steam entity a watcher follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatcherType {
    News,
    Price,
    WorkshopNew,
    WorkshopUpdate,
    Ugc,
}

impl WatcherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatcherType::News => "news",
            WatcherType::Price => "price",
            WatcherType::WorkshopNew => "workshop_new",
            WatcherType::WorkshopUpdate => "workshop_update",
            WatcherType::Ugc => "ugc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionType {
    Role,
    User,
}

impl MentionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "role" => Some(MentionType::Role),
            "user" => Some(MentionType::User),
            _ => None,
        }
    }
}

/// A role or user pinged when a watcher fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub entity_id: String,
    pub mention_type: MentionType,
}

impl Mention {
    /// Discord markup for the mention.
    pub fn markup(&self) -> String {
        match self.mention_type {
            MentionType::Role => format!("<@&{}>", self.entity_id),
            MentionType::User => format!("<@{}>", self.entity_id),
        }
    }
}

/// Everything needed to deliver a notification for one watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherTarget {
    pub watcher_id: i32,
    pub watcher_name: String,
    pub webhook_id: String,
    pub webhook_token: String,
    pub mentions: Vec<Mention>,
}

impl WatcherTarget {
    /// Message content pinging every mention of the watcher, or `None` without mentions.
    pub fn mention_content(&self) -> Option<String> {
        if self.mentions.is_empty() {
            return None;
        }

        Some(
            self.mentions
                .iter()
                .map(Mention::markup)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}
