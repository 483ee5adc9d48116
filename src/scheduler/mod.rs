//! The watcher polling scheduler.
//!
//! [`Scheduler`] owns the notification queue and one poller per watched entity kind
//! (news, price, workshop, UGC). Pollers run independently of each other and of the
//! queue; they only meet at [`queue::NotificationQueue::enqueue`].

pub mod notification;
pub mod poller;
pub mod priority;
pub mod queue;
pub mod timer;

#[cfg(test)]
mod test;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    discord::WebhookSender,
    scheduler::{
        poller::{
            news::NewsWatch, price::PriceWatch, ugc::UgcWatch, workshop::WorkshopWatch, Lifecycle,
            Poller, PollerSettings, PollerState,
        },
        queue::{NotificationQueue, QueueSettings},
    },
    steam::SteamSource,
};

/// Starts and stops the notification queue and every poller as one unit.
pub struct Scheduler {
    queue: NotificationQueue,
    pollers: Vec<Box<dyn Lifecycle>>,
}

impl Scheduler {
    pub fn new(queue: NotificationQueue, pollers: Vec<Box<dyn Lifecycle>>) -> Self {
        Self { queue, pollers }
    }

    /// Builds the queue and the four pollers from configuration.
    ///
    /// # Arguments
    /// - `config` - Poll intervals and snapshot path
    /// - `db` - Database connection shared by the queue and pollers
    /// - `steam` - Steam source the pollers fetch from
    /// - `sender` - Webhook destination the queue delivers to
    pub fn from_config(
        config: &Config,
        db: DatabaseConnection,
        steam: Arc<dyn SteamSource>,
        sender: Arc<dyn WebhookSender>,
    ) -> Self {
        let queue = NotificationQueue::new(
            db.clone(),
            sender,
            config.queue_snapshot_path.clone(),
            QueueSettings::default(),
        );
        let settings = PollerSettings::default();

        let pollers: Vec<Box<dyn Lifecycle>> = vec![
            Box::new(Poller::new(
                NewsWatch,
                db.clone(),
                steam.clone(),
                queue.clone(),
                config.news_poll_interval_hours,
                settings.clone(),
            )),
            Box::new(Poller::new(
                PriceWatch,
                db.clone(),
                steam.clone(),
                queue.clone(),
                config.price_poll_interval_hours,
                settings.clone(),
            )),
            Box::new(Poller::new(
                WorkshopWatch,
                db.clone(),
                steam.clone(),
                queue.clone(),
                config.workshop_poll_interval_hours,
                settings.clone(),
            )),
            Box::new(Poller::new(
                UgcWatch,
                db,
                steam,
                queue.clone(),
                config.ugc_poll_interval_hours,
                settings,
            )),
        ];

        Self::new(queue, pollers)
    }

    /// Starts the queue, then every poller.
    ///
    /// The queue comes first so it is ready before any poller can produce a notification.
    pub async fn start(&mut self) {
        self.queue.start().await;

        for poller in &mut self.pollers {
            poller.start();
        }

        tracing::info!("Scheduler started with {} pollers", self.pollers.len());
    }

    /// Stops every poller, waits for them to exit, then stops the queue.
    ///
    /// The queue stops last so its final snapshot includes anything enqueued by a poller's
    /// last cycle.
    pub async fn stop(&mut self) {
        for poller in &mut self.pollers {
            poller.stop();
        }

        for poller in &mut self.pollers {
            poller.stopped().await;
        }

        self.queue.stop().await;

        tracing::info!("Scheduler stopped");
    }

    pub fn queue(&self) -> &NotificationQueue {
        &self.queue
    }

    /// Name and current state of every poller.
    pub fn poller_states(&self) -> Vec<(&'static str, PollerState)> {
        self.pollers
            .iter()
            .map(|poller| (poller.name(), poller.state()))
            .collect()
    }
}
