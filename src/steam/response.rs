//! Wire formats of the Steam Web API endpoints used by [`super::client::SteamClient`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::{
    error::steam::SteamError,
    model::{
        news::NewsItem,
        price::{PriceLookup, PriceOverview},
        ugc::PublishedFile,
        workshop::WorkshopFile,
    },
};

#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub appnews: AppNews,
}

#[derive(Debug, Deserialize)]
pub struct AppNews {
    #[serde(default)]
    pub newsitems: Vec<NewsEntry>,
}

#[derive(Debug, Deserialize)]
pub struct NewsEntry {
    pub gid: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub feedlabel: Option<String>,
    pub date: i64,
}

impl NewsEntry {
    pub fn into_news_item(self) -> NewsItem {
        NewsItem {
            gid: self.gid,
            title: self.title,
            url: self.url,
            author: self.author.filter(|a| !a.is_empty()),
            contents: self.contents,
            feed_label: self.feedlabel,
            published_at: timestamp(self.date),
        }
    }
}

/// One entry of the `appdetails` or `packagedetails` response, keyed by id in the outer map.
#[derive(Debug, Deserialize)]
pub struct StoreDetails {
    pub success: bool,
    /// An object when the entry has details, but an empty array when filtering a free app.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawPriceOverview {
    initial: i32,
    #[serde(rename = "final")]
    final_price: i32,
    discount_percent: i32,
}

impl StoreDetails {
    /// Reads the price object stored under `price_key` in `data`.
    ///
    /// A missing entry, missing details or a missing price mean the entry is not sold. A
    /// price object that is present but malformed is a decode error, never `Unavailable`.
    pub fn into_lookup(
        self,
        endpoint: &'static str,
        price_key: &str,
    ) -> Result<PriceLookup, SteamError> {
        if !self.success {
            return Ok(PriceLookup::Unavailable);
        }

        let Some(overview) = self
            .data
            .as_ref()
            .and_then(|data| data.get(price_key))
            .filter(|overview| !overview.is_null())
        else {
            return Ok(PriceLookup::Unavailable);
        };

        let raw = RawPriceOverview::deserialize(overview).map_err(|e| SteamError::Decode {
            endpoint,
            reason: e.to_string(),
        })?;

        Ok(PriceLookup::Priced(PriceOverview {
            initial: raw.initial,
            final_price: raw.final_price,
            discount_percent: raw.discount_percent,
        }))
    }
}

/// One bundle of the `ajaxresolvebundles` response.
///
/// Bundles Steam does not know are left out of the response entirely.
#[derive(Debug, Deserialize)]
pub struct ResolvedBundle {
    pub bundleid: i32,
    pub initial_price: i32,
    pub final_price: i32,
    #[serde(default)]
    pub discount_percent: i32,
}

impl ResolvedBundle {
    pub fn into_lookup(self) -> (i32, PriceLookup) {
        (
            self.bundleid,
            PriceLookup::Priced(PriceOverview {
                initial: self.initial_price,
                final_price: self.final_price,
                discount_percent: self.discount_percent,
            }),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryFilesResponse {
    pub response: QueryFiles,
}

#[derive(Debug, Deserialize)]
pub struct QueryFiles {
    #[serde(default)]
    pub publishedfiledetails: Vec<QueriedFile>,
}

#[derive(Debug, Deserialize)]
pub struct QueriedFile {
    pub publishedfileid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub file_description: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub banned: bool,
    #[serde(default)]
    pub time_created: i64,
    #[serde(default)]
    pub time_updated: i64,
}

impl QueriedFile {
    pub fn into_workshop_file(self) -> WorkshopFile {
        WorkshopFile {
            id: self.publishedfileid,
            title: self.title,
            creator: self.creator,
            description: self.file_description.filter(|d| !d.is_empty()),
            preview_url: self.preview_url.filter(|p| !p.is_empty()),
            banned: self.banned,
            time_created: timestamp(self.time_created),
            time_updated: timestamp(self.time_updated),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FileDetailsResponse {
    pub response: FileDetails,
}

#[derive(Debug, Deserialize)]
pub struct FileDetails {
    #[serde(default)]
    pub publishedfiledetails: Vec<FileDetail>,
}

#[derive(Debug, Deserialize)]
pub struct FileDetail {
    pub publishedfileid: String,
    pub result: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub banned: bool,
    #[serde(default)]
    pub ban_reason: Option<String>,
    #[serde(default)]
    pub time_updated: Option<i64>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl FileDetail {
    pub fn into_published_file(self) -> PublishedFile {
        PublishedFile {
            id: self.publishedfileid,
            result: self.result,
            banned: self.banned,
            ban_reason: self.ban_reason.filter(|r| !r.is_empty()),
            title: self.title,
            time_updated: self.time_updated.map(timestamp),
            preview_url: self.preview_url.filter(|p| !p.is_empty()),
        }
    }
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Steam reports `banned` as a boolean on some endpoints and as `0`/`1` on others.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(value) => Ok(value),
        serde_json::Value::Number(value) => Ok(value.as_i64().unwrap_or(0) != 0),
        _ => Ok(false),
    }
}
