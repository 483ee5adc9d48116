//! reqwest implementation of [`SteamSource`].

use std::collections::HashMap;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serenity::async_trait;

use super::{
    response::{
        FileDetailsResponse, NewsResponse, QueryFilesResponse, ResolvedBundle, StoreDetails,
    },
    SteamSource,
};
use crate::{
    error::steam::SteamError,
    model::{
        news::NewsItem,
        price::{PriceKind, PriceLookup},
        ugc::PublishedFile,
        workshop::{WorkshopFile, WorkshopListing},
    },
};

const NEWS_URL: &str = "https://api.steampowered.com/ISteamNews/GetNewsForApp/v2/";
const APP_DETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";
const PACKAGE_DETAILS_URL: &str = "https://store.steampowered.com/api/packagedetails";
const RESOLVE_BUNDLES_URL: &str = "https://store.steampowered.com/actions/ajaxresolvebundles";
const QUERY_FILES_URL: &str = "https://api.steampowered.com/IPublishedFileService/QueryFiles/v1/";
const FILE_DETAILS_URL: &str =
    "https://api.steampowered.com/ISteamRemoteStorage/GetPublishedFileDetails/v1/";

/// Maximum article body length requested from the news endpoint.
const NEWS_MAX_LENGTH: u32 = 1000;

/// `EPublishedFileQueryType` values for the two workshop listings.
const QUERY_RANKED_BY_PUBLICATION_DATE: u32 = 1;
const QUERY_RANKED_BY_LAST_UPDATED_DATE: u32 = 21;

pub struct SteamClient {
    http: Client,
    api_key: Option<String>,
}

impl SteamClient {
    /// Creates a client over an existing reqwest client.
    ///
    /// # Arguments
    /// - `http` - reqwest client, expected to carry a request timeout
    /// - `api_key` - Steam Web API key, required only for workshop listings
    pub fn new(http: Client, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }

    /// Fetches an `appdetails` style endpoint and reads the price object under `price_key`
    /// of every entry.
    async fn store_prices(
        &self,
        endpoint: &'static str,
        url: &str,
        query: &[(&str, &str)],
        price_key: &str,
    ) -> Result<HashMap<i32, PriceLookup>, SteamError> {
        let response = self.http.get(url).query(query).send().await?;
        let details: HashMap<String, StoreDetails> = Self::decode(endpoint, response).await?;

        let mut prices = HashMap::with_capacity(details.len());
        for (id, details) in details {
            let Ok(id) = id.parse::<i32>() else {
                continue;
            };
            prices.insert(id, details.into_lookup(endpoint, price_key)?);
        }

        Ok(prices)
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<T, SteamError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SteamError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SteamError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl SteamSource for SteamClient {
    async fn get_latest_news(&self, app_id: i32) -> Result<Option<NewsItem>, SteamError> {
        let response = self
            .http
            .get(NEWS_URL)
            .query(&[
                ("appid", app_id.to_string()),
                ("count", "1".to_string()),
                ("maxlength", NEWS_MAX_LENGTH.to_string()),
            ])
            .send()
            .await?;

        let news: NewsResponse = Self::decode("GetNewsForApp", response).await?;

        Ok(news
            .appnews
            .newsitems
            .into_iter()
            .next()
            .map(|entry| entry.into_news_item()))
    }

    async fn get_prices(
        &self,
        kind: PriceKind,
        ids: &[i32],
        country_code: &str,
    ) -> Result<HashMap<i32, PriceLookup>, SteamError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        match kind {
            PriceKind::App => {
                let query = [
                    ("appids", ids.as_str()),
                    ("cc", country_code),
                    ("filters", "price_overview"),
                ];
                self.store_prices("appdetails", APP_DETAILS_URL, &query, "price_overview")
                    .await
            }
            PriceKind::Sub => {
                let query = [("packageids", ids.as_str()), ("cc", country_code)];
                self.store_prices("packagedetails", PACKAGE_DETAILS_URL, &query, "price")
                    .await
            }
            PriceKind::Bundle => {
                let response = self
                    .http
                    .get(RESOLVE_BUNDLES_URL)
                    .query(&[
                        ("bundleids", ids.as_str()),
                        ("cc", country_code),
                        ("l", "english"),
                    ])
                    .send()
                    .await?;

                let bundles: Vec<ResolvedBundle> =
                    Self::decode("ajaxresolvebundles", response).await?;

                Ok(bundles.into_iter().map(ResolvedBundle::into_lookup).collect())
            }
        }
    }

    async fn get_workshop_listing(
        &self,
        app_id: i32,
        listing: WorkshopListing,
    ) -> Result<Option<WorkshopFile>, SteamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SteamError::MissingApiKey("QueryFiles"))?;

        let query_type = match listing {
            WorkshopListing::New => QUERY_RANKED_BY_PUBLICATION_DATE,
            WorkshopListing::Update => QUERY_RANKED_BY_LAST_UPDATED_DATE,
        };

        let response = self
            .http
            .get(QUERY_FILES_URL)
            .query(&[
                ("key", api_key.to_string()),
                ("appid", app_id.to_string()),
                ("query_type", query_type.to_string()),
                ("numperpage", "1".to_string()),
                ("return_details", "true".to_string()),
                ("return_short_description", "true".to_string()),
            ])
            .send()
            .await?;

        let files: QueryFilesResponse = Self::decode("QueryFiles", response).await?;

        Ok(files
            .response
            .publishedfiledetails
            .into_iter()
            .next()
            .map(|file| file.into_workshop_file()))
    }

    async fn get_published_file_details(
        &self,
        ids: &[String],
    ) -> Result<Vec<PublishedFile>, SteamError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut form = vec![("itemcount".to_string(), ids.len().to_string())];
        for (index, id) in ids.iter().enumerate() {
            form.push((format!("publishedfileids[{}]", index), id.clone()));
        }

        let response = self.http.post(FILE_DETAILS_URL).form(&form).send().await?;

        let details: FileDetailsResponse =
            Self::decode("GetPublishedFileDetails", response).await?;

        Ok(details
            .response
            .publishedfiledetails
            .into_iter()
            .map(|detail| detail.into_published_file())
            .collect())
    }
}
