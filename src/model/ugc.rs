use chrono::{DateTime, Utc};

/// Steam `EResult` value for a successful lookup.
pub const RESULT_OK: i32 = 1;

/// A watched user-generated content item (workshop file).
#[derive(Debug, Clone, PartialEq)]
pub struct Ugc {
    /// Published file id.
    pub id: String,
    pub app_id: i32,
    pub name: String,
    pub last_update: Option<DateTime<Utc>>,
    pub last_checked: Option<DateTime<Utc>>,
}

impl Ugc {
    pub fn from_entity(entity: entity::ugc::Model) -> Self {
        Self {
            id: entity.id,
            app_id: entity.app_id,
            name: entity.name,
            last_update: entity.last_update,
            last_checked: entity.last_checked,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "https://steamcommunity.com/sharedfiles/filedetails/?id={}",
            self.id
        )
    }
}

/// Published file details as returned by Steam for one id.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedFile {
    pub id: String,
    /// Steam `EResult` for this item; anything but [`RESULT_OK`] means the lookup failed.
    pub result: i32,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub title: Option<String>,
    pub time_updated: Option<DateTime<Utc>>,
    pub preview_url: Option<String>,
}

/// Why a UGC item can no longer be watched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UgcRemoval {
    NotFound,
    Banned(Option<String>),
    Failed(i32),
}

impl UgcRemoval {
    pub fn reason(&self) -> String {
        match self {
            UgcRemoval::NotFound => "The item could not be found.".to_string(),
            UgcRemoval::Banned(Some(reason)) if !reason.is_empty() => {
                format!("The item has been banned: {}", reason)
            }
            UgcRemoval::Banned(_) => "The item has been banned.".to_string(),
            UgcRemoval::Failed(code) => {
                format!("Steam returned error result {} for the item.", code)
            }
        }
    }
}

/// How the UGC poller should treat a fetched item.
#[derive(Debug, Clone, PartialEq)]
pub enum UgcStatus {
    Updated,
    Unchanged,
    Removed(UgcRemoval),
}

/// Compares a fetched item against the cached one.
///
/// `details` is `None` when Steam's response did not contain the id at all.
pub fn classify_ugc(stored: &Ugc, details: Option<&PublishedFile>) -> UgcStatus {
    let Some(details) = details else {
        return UgcStatus::Removed(UgcRemoval::NotFound);
    };

    if details.result != RESULT_OK {
        return UgcStatus::Removed(UgcRemoval::Failed(details.result));
    }

    if details.banned {
        return UgcStatus::Removed(UgcRemoval::Banned(details.ban_reason.clone()));
    }

    match (details.time_updated, stored.last_update) {
        (Some(fetched), Some(cached)) if fetched > cached => UgcStatus::Updated,
        (Some(_), None) => UgcStatus::Updated,
        _ => UgcStatus::Unchanged,
    }
}
