//! Steam Web API access for the pollers.
//!
//! Pollers only depend on the [`SteamSource`] trait, which exposes the four fetch-by-id
//! operations they need. [`client::SteamClient`] implements it over reqwest; tests provide
//! their own implementation.

pub mod client;
mod response;

use std::collections::HashMap;

use serenity::async_trait;

use crate::{
    error::steam::SteamError,
    model::{
        news::NewsItem,
        price::{PriceKind, PriceLookup},
        ugc::PublishedFile,
        workshop::{WorkshopFile, WorkshopListing},
    },
};

#[async_trait]
pub trait SteamSource: Send + Sync {
    /// Fetches the newest news article for an app, or `None` if the app has no news.
    async fn get_latest_news(&self, app_id: i32) -> Result<Option<NewsItem>, SteamError>;

    /// Fetches prices for several apps, packages or bundles of one kind in one storefront
    /// region.
    ///
    /// Ids Steam omits from its response are absent from the returned map. A price Steam
    /// returns in an unexpected shape fails the whole batch with [`SteamError::Decode`].
    async fn get_prices(
        &self,
        kind: PriceKind,
        ids: &[i32],
        country_code: &str,
    ) -> Result<HashMap<i32, PriceLookup>, SteamError>;

    /// Fetches the head of an app's workshop listing, or `None` for an empty workshop.
    async fn get_workshop_listing(
        &self,
        app_id: i32,
        listing: WorkshopListing,
    ) -> Result<Option<WorkshopFile>, SteamError>;

    /// Fetches published file details for several UGC items.
    async fn get_published_file_details(
        &self,
        ids: &[String],
    ) -> Result<Vec<PublishedFile>, SteamError>;
}
