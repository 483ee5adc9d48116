use chrono::{DateTime, Utc};

/// Which workshop listing a watcher follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkshopListing {
    /// Most recent submission by publish date.
    New,
    /// Most recently updated submission.
    Update,
}

impl WorkshopListing {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkshopListing::New => "new",
            WorkshopListing::Update => "update",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(WorkshopListing::New),
            "update" => Some(WorkshopListing::Update),
            _ => None,
        }
    }
}

/// Cached head of an app's workshop listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AppWorkshop {
    pub id: i32,
    pub app_id: i32,
    pub listing: WorkshopListing,
    pub latest_file_id: Option<String>,
    pub latest_time: Option<DateTime<Utc>>,
    pub last_checked: Option<DateTime<Utc>>,
}

impl AppWorkshop {
    /// Converts an entity model, returning `None` for an unrecognised listing value.
    pub fn from_entity(entity: entity::app_workshop::Model) -> Option<Self> {
        Some(Self {
            id: entity.id,
            app_id: entity.app_id,
            listing: WorkshopListing::parse(&entity.listing)?,
            latest_file_id: entity.latest_file_id,
            latest_time: entity.latest_time,
            last_checked: entity.last_checked,
        })
    }
}

/// A workshop submission returned by a listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopFile {
    pub id: String,
    pub title: String,
    pub creator: Option<String>,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub banned: bool,
    pub time_created: DateTime<Utc>,
    pub time_updated: DateTime<Utc>,
}

impl WorkshopFile {
    /// The timestamp that orders this file within the given listing.
    pub fn listing_time(&self, listing: WorkshopListing) -> DateTime<Utc> {
        match listing {
            WorkshopListing::New => self.time_created,
            WorkshopListing::Update => self.time_updated,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "https://steamcommunity.com/sharedfiles/filedetails/?id={}",
            self.id
        )
    }
}

/// Whether a fetched listing head is a new submission the watchers should hear about.
///
/// Banned submissions are never announced. Once a head has been recorded, a fetched head
/// only counts when its listing time is newer: the same file updated again counts, while an
/// older file that resurfaces because the newest one was deleted or hidden does not.
pub fn is_new_submission(cached: &AppWorkshop, fetched: &WorkshopFile) -> bool {
    if fetched.banned {
        return false;
    }

    match cached.latest_time {
        Some(time) => fetched.listing_time(cached.listing) > time,
        None => cached.latest_file_id.as_deref() != Some(fetched.id.as_str()),
    }
}
