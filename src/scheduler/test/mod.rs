//! Scheduler tests with in-memory Steam and Discord stand-ins.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::{
    discord::{BotIdentity, WebhookSender},
    error::{steam::SteamError, webhook::WebhookError},
    model::{
        news::NewsItem,
        notification::{NotificationEmbed, QueuedNotification, WebhookMessage},
        price::{PriceKind, PriceLookup, PriceOverview},
        ugc::{PublishedFile, RESULT_OK},
        workshop::{WorkshopFile, WorkshopListing},
    },
    scheduler::{
        poller::{Poller, PollerSettings, WatchKind},
        queue::{NotificationQueue, QueueSettings},
    },
    steam::SteamSource,
};


/// Steam source serving canned responses.
#[derive(Default)]
pub struct MockSteam {
    news: Mutex<HashMap<i32, NewsItem>>,
    prices: Mutex<HashMap<(PriceKind, i32), PriceLookup>>,
    workshop: Mutex<HashMap<(i32, WorkshopListing), WorkshopFile>>,
    files: Mutex<HashMap<String, PublishedFile>>,
    failing: AtomicBool,
    failing_news: Mutex<HashSet<i32>>,
    price_requests: Mutex<Vec<PriceKind>>,
    hanging: AtomicBool,
    delays: Mutex<VecDeque<Duration>>,
    calls: AtomicUsize,
    completed: AtomicUsize,
}

impl MockSteam {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_news(&self, app_id: i32, item: NewsItem) {
        self.news.lock().unwrap().insert(app_id, item);
    }

    pub fn set_price(&self, app_id: i32, lookup: PriceLookup) {
        self.set_target_price(PriceKind::App, app_id, lookup);
    }

    /// Serves a price for a package or bundle id.
    pub fn set_target_price(&self, kind: PriceKind, id: i32, lookup: PriceLookup) {
        self.prices.lock().unwrap().insert((kind, id), lookup);
    }

    /// Kinds of every price request, in order.
    pub fn price_requests(&self) -> Vec<PriceKind> {
        self.price_requests.lock().unwrap().clone()
    }

    pub fn set_workshop(&self, app_id: i32, listing: WorkshopListing, file: WorkshopFile) {
        self.workshop
            .lock()
            .unwrap()
            .insert((app_id, listing), file);
    }

    pub fn set_file(&self, file: PublishedFile) {
        self.files.lock().unwrap().insert(file.id.clone(), file);
    }

    /// Makes every request fail with a 503.
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes news requests for one app fail with a 503.
    pub fn fail_news_for(&self, app_id: i32) {
        self.failing_news.lock().unwrap().insert(app_id);
    }

    /// Makes every request wait forever.
    pub fn hang(&self, hanging: bool) {
        self.hanging.store(hanging, Ordering::SeqCst);
    }

    /// Delays the next requests, one duration per request in order.
    pub fn delay_requests(&self, delays: Vec<Duration>) {
        self.delays.lock().unwrap().extend(delays);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests that ran to the end, successful or not.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    async fn request(&self, endpoint: &'static str) -> Result<(), SteamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.hanging.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(SteamError::Status {
                endpoint,
                status: 503,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl SteamSource for MockSteam {
    async fn get_latest_news(&self, app_id: i32) -> Result<Option<NewsItem>, SteamError> {
        self.request("GetNewsForApp").await?;
        if self.failing_news.lock().unwrap().contains(&app_id) {
            return Err(SteamError::Status {
                endpoint: "GetNewsForApp",
                status: 503,
            });
        }

        Ok(self.news.lock().unwrap().get(&app_id).cloned())
    }

    async fn get_prices(
        &self,
        kind: PriceKind,
        ids: &[i32],
        _country_code: &str,
    ) -> Result<HashMap<i32, PriceLookup>, SteamError> {
        self.request("appdetails").await?;
        self.price_requests.lock().unwrap().push(kind);

        let prices = self.prices.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| prices.get(&(kind, *id)).map(|lookup| (*id, *lookup)))
            .collect())
    }

    async fn get_workshop_listing(
        &self,
        app_id: i32,
        listing: WorkshopListing,
    ) -> Result<Option<WorkshopFile>, SteamError> {
        self.request("QueryFiles").await?;

        Ok(self
            .workshop
            .lock()
            .unwrap()
            .get(&(app_id, listing))
            .cloned())
    }

    async fn get_published_file_details(
        &self,
        ids: &[String],
    ) -> Result<Vec<PublishedFile>, SteamError> {
        self.request("GetPublishedFileDetails").await?;

        let files = self.files.lock().unwrap();
        Ok(ids.iter().filter_map(|id| files.get(id).cloned()).collect())
    }
}

/// Webhook sender recording every attempt and answering from a script.
///
/// Attempts beyond the script succeed.
#[derive(Default)]
pub struct MockSender {
    script: Mutex<VecDeque<Result<(), WebhookError>>>,
    attempts: Mutex<Vec<QueuedNotification>>,
    identity_failure: AtomicBool,
}

impl MockSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script(&self, results: Vec<Result<(), WebhookError>>) {
        self.script.lock().unwrap().extend(results);
    }

    pub fn fail_identity(&self) {
        self.identity_failure.store(true, Ordering::SeqCst);
    }

    /// Destination ids of every delivery attempt, in order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.destination_id.clone())
            .collect()
    }
}

#[async_trait]
impl WebhookSender for MockSender {
    async fn identity(&self) -> Result<BotIdentity, WebhookError> {
        if self.identity_failure.load(Ordering::SeqCst) {
            return Err(WebhookError::Other("identity unavailable".to_string()));
        }

        Ok(BotIdentity {
            name: "SteamWatch".to_string(),
            avatar_url: None,
        })
    }

    async fn send(
        &self,
        notification: &QueuedNotification,
        _identity: Option<&BotIdentity>,
    ) -> Result<(), WebhookError> {
        self.attempts.lock().unwrap().push(notification.clone());

        self.script.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// Queue that holds on to notifications instead of delivering them during a test.
pub fn holding_queue(db: &DatabaseConnection, dir: &tempfile::TempDir) -> NotificationQueue {
    NotificationQueue::new(
        db.clone(),
        MockSender::new(),
        dir.path().join("queue.json"),
        QueueSettings {
            delay: Duration::from_secs(3600),
            ..Default::default()
        },
    )
}

/// Poller checking every entity on each cycle.
pub fn poller<K: WatchKind>(
    kind: K,
    db: &DatabaseConnection,
    steam: Arc<MockSteam>,
    queue: &NotificationQueue,
) -> Poller<K> {
    Poller::new(kind, db.clone(), steam, queue.clone(), 0, PollerSettings::default())
}

pub fn news_item(gid: &str, published_at: DateTime<Utc>) -> NewsItem {
    NewsItem {
        gid: gid.to_string(),
        title: format!("Article {}", gid),
        url: format!("https://store.steampowered.com/news/{}", gid),
        author: None,
        contents: "Patch notes".to_string(),
        feed_label: None,
        published_at,
    }
}

pub fn priced(initial: i32, discount_percent: i32, final_price: i32) -> PriceLookup {
    PriceLookup::Priced(PriceOverview {
        initial,
        final_price,
        discount_percent,
    })
}

pub fn workshop_file(id: &str, time: DateTime<Utc>) -> WorkshopFile {
    WorkshopFile {
        id: id.to_string(),
        title: format!("Submission {}", id),
        creator: None,
        description: None,
        preview_url: None,
        banned: false,
        time_created: time,
        time_updated: time,
    }
}

pub fn published_file(id: &str, time_updated: DateTime<Utc>) -> PublishedFile {
    PublishedFile {
        id: id.to_string(),
        result: RESULT_OK,
        banned: false,
        ban_reason: None,
        title: Some(format!("Item {}", id)),
        time_updated: Some(time_updated),
        preview_url: None,
    }
}

pub fn notification(destination_id: &str) -> QueuedNotification {
    QueuedNotification {
        destination_id: destination_id.to_string(),
        destination_token: "token".to_string(),
        message: WebhookMessage {
            content: None,
            embeds: vec![NotificationEmbed::new(format!("To {}", destination_id))],
        },
    }
}
