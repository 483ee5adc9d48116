//! Durable, rate-limited webhook delivery queue.
//!
//! Pollers hand notifications to [`NotificationQueue::enqueue`] and move on; a single
//! delivery task drains the queue one webhook call at a time with a fixed delay between
//! calls. The queue is snapshotted to disk periodically and on [`NotificationQueue::stop`],
//! and restored by [`NotificationQueue::start`].
//!
//! Delivery is at least once. A notification that fails transiently is pushed back to the
//! tail, so ordering is not preserved across retries.

mod snapshot;
mod state;

pub use state::QueueBuffer;

use std::{path::PathBuf, sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use super::timer::{delay, TaskHandle, Wake};
use crate::{
    data::channel_webhook::ChannelWebhookRepository,
    discord::{BotIdentity, WebhookSender},
    error::{snapshot::SnapshotError, webhook::WebhookError},
    model::notification::QueuedNotification,
};

/// Timings of the notification queue.
#[derive(Debug, Clone)]
pub struct QueueSettings {
    /// Delay before each delivery attempt.
    pub delay: Duration,
    /// Delay after a delivery failed with a Discord server error.
    pub backoff: Duration,
    /// Interval between periodic snapshots.
    pub snapshot_interval: Duration,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(250),
            backoff: Duration::from_secs(5 * 60),
            snapshot_interval: Duration::from_secs(60),
        }
    }
}

#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<QueueInner>,
}

struct QueueInner {
    db: DatabaseConnection,
    sender: Arc<dyn WebhookSender>,
    snapshot_path: PathBuf,
    settings: QueueSettings,
    identity: RwLock<Option<BotIdentity>>,
    state: Mutex<QueueState>,
    /// Serializes snapshot writes, which share a temp file.
    snapshot_lock: Mutex<()>,
}

struct QueueState {
    buffer: QueueBuffer,
    /// Parent token of the delivery and snapshot tasks; cancelled by `stop`.
    token: CancellationToken,
    /// Running delivery task, `None` while the queue is disarmed.
    delivery: Option<TaskHandle>,
    snapshots: Option<TaskHandle>,
}

impl NotificationQueue {
    /// Creates a stopped queue.
    ///
    /// # Arguments
    /// - `db` - Database connection, used to purge registrations of deleted webhooks
    /// - `sender` - Webhook destination notifications are delivered to
    /// - `snapshot_path` - File the queue is persisted to
    /// - `settings` - Delivery and snapshot timings
    pub fn new(
        db: DatabaseConnection,
        sender: Arc<dyn WebhookSender>,
        snapshot_path: PathBuf,
        settings: QueueSettings,
    ) -> Self {
        Self {
            inner: Arc::new(QueueInner {
                db,
                sender,
                snapshot_path,
                settings,
                identity: RwLock::new(None),
                state: Mutex::new(QueueState {
                    buffer: QueueBuffer::default(),
                    token: CancellationToken::new(),
                    delivery: None,
                    snapshots: None,
                }),
                snapshot_lock: Mutex::new(()),
            }),
        }
    }

    /// Appends a notification to the tail of the queue.
    ///
    /// Arms the delivery task if it is not already running. After `stop` the notification
    /// is only kept in memory.
    pub async fn enqueue(&self, notification: QueuedNotification) {
        let mut state = self.inner.state.lock().await;
        state.buffer.push(notification);

        self.arm(&mut state, self.inner.settings.delay);
    }

    /// Starts the queue.
    ///
    /// Resolves the bot identity used as webhook username and avatar, restores the
    /// snapshot file if one exists, arms delivery when anything is pending and starts the
    /// periodic snapshot task. Calling `start` on a running queue does nothing.
    pub async fn start(&self) {
        if self.inner.state.lock().await.snapshots.is_some() {
            return;
        }

        match self.inner.sender.identity().await {
            Ok(identity) => {
                tracing::info!("Delivering notifications as {}", identity.name);
                *self.inner.identity.write().await = Some(identity);
            }
            Err(e) => {
                tracing::warn!("Failed to resolve bot identity, using webhook defaults: {}", e)
            }
        }

        let restored = match snapshot::load(&self.inner.snapshot_path).await {
            Ok(restored) => restored,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable queue snapshot {}: {}",
                    self.inner.snapshot_path.display(),
                    e
                );
                None
            }
        };

        let mut state = self.inner.state.lock().await;

        if state.token.is_cancelled() {
            state.token = CancellationToken::new();
        }

        if let Some(restored) = restored {
            let queued_before_start = std::mem::replace(&mut state.buffer, restored);
            state.buffer.append(queued_before_start);
            tracing::info!(
                "Restored {} queued notifications from {}",
                state.buffer.len(),
                self.inner.snapshot_path.display()
            );
        }

        if !state.buffer.is_empty() {
            self.arm(&mut state, self.inner.settings.delay);
        }

        let queue = self.clone();
        state.snapshots = Some(TaskHandle::spawn(state.token.child_token(), move |token| {
            queue.snapshot_loop(token)
        }));

        tracing::info!("Notification queue started");
    }

    /// Stops delivery and snapshot tasks, then writes a final snapshot.
    ///
    /// A webhook call already in flight is allowed to finish first.
    pub async fn stop(&self) {
        let (delivery, snapshots) = {
            let mut state = self.inner.state.lock().await;
            state.token.cancel();
            (state.delivery.take(), state.snapshots.take())
        };

        for task in [delivery, snapshots].into_iter().flatten() {
            task.join().await;
        }

        match self.write_snapshot().await {
            Ok(pending) => tracing::info!(
                "Notification queue stopped with {} pending notifications",
                pending
            ),
            Err(e) => tracing::error!("Failed to write final queue snapshot: {}", e),
        }
    }

    /// Number of notifications waiting for delivery.
    pub async fn len(&self) -> usize {
        self.inner.state.lock().await.buffer.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Notifications waiting for delivery, head first.
    pub async fn pending(&self) -> Vec<QueuedNotification> {
        self.inner.state.lock().await.buffer.pending().to_vec()
    }

    /// Whether a delivery task is currently scheduled.
    #[cfg(test)]
    pub async fn is_delivery_scheduled(&self) -> bool {
        self.inner
            .state
            .lock()
            .await
            .delivery
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn arm(&self, state: &mut QueueState, first_delay: Duration) {
        if state.token.is_cancelled() {
            return;
        }
        if state
            .delivery
            .as_ref()
            .is_some_and(|task| !task.is_finished())
        {
            return;
        }

        let queue = self.clone();
        state.delivery = Some(TaskHandle::spawn(state.token.child_token(), move |token| {
            queue.delivery_loop(token, first_delay)
        }));
    }

    /// Delivers notifications one at a time until the queue is empty or the queue stops.
    async fn delivery_loop(self, token: CancellationToken, first_delay: Duration) {
        let mut wait = first_delay;

        loop {
            if delay(&token, wait).await == Wake::Cancelled {
                return;
            }

            let next = {
                let mut state = self.inner.state.lock().await;
                match state.buffer.pop() {
                    Some(notification) => notification,
                    None => {
                        state.delivery = None;
                        return;
                    }
                }
            };

            wait = self.deliver(next).await;

            if token.is_cancelled() {
                return;
            }

            let mut state = self.inner.state.lock().await;
            if state.buffer.is_empty() {
                state.delivery = None;
                return;
            }
        }
    }

    /// Sends one notification and returns the delay before the next attempt.
    async fn deliver(&self, notification: QueuedNotification) -> Duration {
        let settings = &self.inner.settings;
        let identity = self.inner.identity.read().await.clone();

        match self
            .inner
            .sender
            .send(&notification, identity.as_ref())
            .await
        {
            Ok(()) => {
                tracing::debug!(
                    "Delivered notification to webhook {}",
                    notification.destination_id
                );
                settings.delay
            }
            Err(WebhookError::UnknownWebhook) => {
                tracing::warn!(
                    "Webhook {} no longer exists, purging its registration",
                    notification.destination_id
                );

                match ChannelWebhookRepository::new(&self.inner.db)
                    .purge_by_webhook_id(&notification.destination_id)
                    .await
                {
                    Ok(purged) => tracing::info!(
                        "Purged {} channel registrations for webhook {}",
                        purged,
                        notification.destination_id
                    ),
                    Err(e) => tracing::error!(
                        "Failed to purge webhook {}: {}",
                        notification.destination_id,
                        e
                    ),
                }

                settings.delay
            }
            Err(e) => {
                let wait = if e.is_server_error() {
                    settings.backoff
                } else {
                    settings.delay
                };

                tracing::warn!(
                    "Failed to deliver notification to webhook {}, retrying in {:?}: {}",
                    notification.destination_id,
                    wait,
                    e
                );

                self.inner.state.lock().await.buffer.push(notification);

                wait
            }
        }
    }

    async fn snapshot_loop(self, token: CancellationToken) {
        while delay(&token, self.inner.settings.snapshot_interval).await == Wake::Elapsed {
            if let Err(e) = self.write_snapshot().await {
                tracing::error!("Failed to write queue snapshot: {}", e);
            }
        }
    }

    /// Writes the current queue to the snapshot file.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of pending notifications written
    /// - `Err(SnapshotError)` - Serialization or file system failure
    async fn write_snapshot(&self) -> Result<usize, SnapshotError> {
        let _guard = self.inner.snapshot_lock.lock().await;
        let buffer = self.inner.state.lock().await.buffer.clone();

        snapshot::save(&self.inner.snapshot_path, &buffer).await?;

        Ok(buffer.len())
    }
}
