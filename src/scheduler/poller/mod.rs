//! Scheduling core shared by every poller.
//!
//! A [`Poller`] repeatedly runs one cycle of its [`WatchKind`]:
//!
//! 1. **Select** the most due entity (or batch) by priority score
//! 2. **Fetch** its live state from Steam, bounded by the fetch timeout
//! 3. **Apply** the result: diff against the cached state, persist, build notifications
//! 4. **Enqueue** the notifications into the shared [`NotificationQueue`]
//!
//! After a cycle that processed something the poller waits a short time before the next
//! one; when nothing was due it pauses for longer. Fetch failures are logged and skip the
//! cycle. The entity stays due unless its kind marks it checked in
//! [`WatchKind::on_fetch_failed`], which keeps one entity that always fails from being
//! selected on every cycle.
//!
//! State transitions:
//!
//! ```text
//! Idle --start--> Working --nothing due--> Paused --pause elapsed--> Working
//!                 Working --processed----> Waiting --wait elapsed--> Working
//! any --stop--> Stopped --start--> Working
//! ```

pub mod news;
pub mod price;
pub mod ugc;
pub mod workshop;

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::async_trait;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::{
    queue::NotificationQueue,
    timer::{delay, TaskHandle, Wake},
};
use crate::{
    error::{steam::SteamError, AppError},
    model::notification::QueuedNotification,
    steam::SteamSource,
};

/// Timings and limits of a poller.
#[derive(Debug, Clone)]
pub struct PollerSettings {
    /// Delay after a cycle that processed an entity.
    pub wait: Duration,
    /// Delay after a cycle that found nothing due.
    pub pause: Duration,
    /// Upper bound on a single Steam fetch.
    pub fetch_timeout: Duration,
    /// Most entities fetched together by batching pollers.
    pub batch_size: usize,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            wait: Duration::from_secs(10),
            pause: Duration::from_secs(15 * 60),
            fetch_timeout: Duration::from_secs(30),
            batch_size: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Working,
    Waiting,
    Paused,
    Stopped,
}

/// Result of one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No entity of this kind is due.
    NothingDue,
    /// Steam could not be reached or answered unusably; nothing was persisted.
    FetchFailed,
    /// The store failed while selecting or applying.
    StoreFailed,
    /// The fetched state was applied.
    Processed { notifications: usize },
}

/// Shared resources a watch kind operates on.
pub struct PollContext {
    pub db: DatabaseConnection,
    pub steam: Arc<dyn SteamSource>,
    /// Hours after which a checked entity is due again.
    pub interval_hours: u32,
    pub batch_size: usize,
}

/// Per-kind behaviour plugged into the scheduling core.
#[async_trait]
pub trait WatchKind: Send + Sync + 'static {
    /// A selected entity together with whatever `apply` needs to process it.
    type Candidate: Send + Sync;
    /// Live state returned by Steam for the selected candidates.
    type Fetched: Send;

    /// Name used in logs.
    const NAME: &'static str;

    /// Selects the entities to check this cycle, highest priority first.
    ///
    /// # Returns
    /// - `Ok(Vec<Candidate>)` - Entities to fetch; empty when nothing is due
    /// - `Err(AppError)` - Store failure
    async fn select(
        &self,
        ctx: &PollContext,
        now: DateTime<Utc>,
    ) -> Result<Vec<Self::Candidate>, AppError>;

    /// Fetches live state for the selected candidates.
    async fn fetch(
        &self,
        ctx: &PollContext,
        candidates: &[Self::Candidate],
    ) -> Result<Self::Fetched, SteamError>;

    /// Diffs fetched state against the cache, persists it and pushes notifications into
    /// `outbox`.
    ///
    /// Notifications pushed before an error are still delivered.
    async fn apply(
        &self,
        ctx: &PollContext,
        candidates: Vec<Self::Candidate>,
        fetched: Self::Fetched,
        now: DateTime<Utc>,
        outbox: &mut Vec<QueuedNotification>,
    ) -> Result<(), AppError>;

    /// Runs after fetching `candidates` failed or timed out.
    ///
    /// Leaves the candidates due by default.
    async fn on_fetch_failed(
        &self,
        _ctx: &PollContext,
        _candidates: &[Self::Candidate],
        _now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

/// Start/stop surface the scheduler driver uses for every poller.
#[async_trait]
pub trait Lifecycle: Send {
    fn name(&self) -> &'static str;

    fn start(&mut self);

    /// Cancels the pending timer. Stopping a stopped poller does nothing.
    fn stop(&mut self);

    /// Waits for the poller task to exit after [`Lifecycle::stop`].
    async fn stopped(&mut self);

    fn state(&self) -> PollerState;
}

pub struct Poller<K: WatchKind> {
    core: Arc<PollerCore<K>>,
    task: Option<TaskHandle>,
    /// Stopped tasks replaced by a restart before [`Poller::stopped`] joined them.
    retired: Vec<TaskHandle>,
}

struct PollerCore<K: WatchKind> {
    kind: K,
    ctx: PollContext,
    queue: NotificationQueue,
    settings: PollerSettings,
    state: watch::Sender<PollerState>,
}

impl<K: WatchKind> Poller<K> {
    /// Creates an idle poller.
    ///
    /// # Arguments
    /// - `kind` - Watch kind implementing selection, fetching and diffing
    /// - `db` - Database connection
    /// - `steam` - Steam source to fetch live state from
    /// - `queue` - Queue notifications are handed to
    /// - `interval_hours` - Poll interval of this kind
    /// - `settings` - Timings and batch size
    pub fn new(
        kind: K,
        db: DatabaseConnection,
        steam: Arc<dyn SteamSource>,
        queue: NotificationQueue,
        interval_hours: u32,
        settings: PollerSettings,
    ) -> Self {
        let (state, _) = watch::channel(PollerState::Idle);

        Self {
            core: Arc::new(PollerCore {
                kind,
                ctx: PollContext {
                    db,
                    steam,
                    interval_hours,
                    batch_size: settings.batch_size,
                },
                queue,
                settings,
                state,
            }),
            task: None,
            retired: Vec::new(),
        }
    }

    /// Starts the poll loop; the first cycle runs immediately.
    ///
    /// Starting a running poller does nothing.
    pub fn start(&mut self) {
        if self.task.as_ref().is_some_and(|task| !task.is_cancelled()) {
            return;
        }

        self.core.state.send_replace(PollerState::Working);

        let core = self.core.clone();
        let task = TaskHandle::spawn(CancellationToken::new(), move |token| core.run(token));
        self.retired.retain(|task| !task.is_finished());
        if let Some(previous) = self.task.replace(task) {
            self.retired.push(previous);
        }

        tracing::info!("{} poller started", K::NAME);
    }

    /// Cancels the poll loop.
    ///
    /// A cycle in progress runs to completion but no further cycle is scheduled.
    pub fn stop(&mut self) {
        if let Some(task) = &self.task {
            if !task.is_cancelled() {
                task.cancel();
                tracing::info!("{} poller stopped", K::NAME);
            }
        }

        self.core.state.send_replace(PollerState::Stopped);
    }

    /// Waits for the poll loop task to exit, including tasks stopped before a restart.
    pub async fn stopped(&mut self) {
        for task in self.retired.drain(..) {
            task.join().await;
        }

        if let Some(task) = self.task.take() {
            task.cancel();
            task.join().await;
        }
    }

    pub fn state(&self) -> PollerState {
        *self.core.state.borrow()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<PollerState> {
        self.core.state.subscribe()
    }

    /// Runs a single cycle outside the loop.
    #[cfg(test)]
    pub async fn run_cycle(&self) -> CycleOutcome {
        self.core.cycle(Utc::now()).await
    }
}

#[async_trait]
impl<K: WatchKind> Lifecycle for Poller<K> {
    fn name(&self) -> &'static str {
        K::NAME
    }

    fn start(&mut self) {
        Poller::start(self);
    }

    fn stop(&mut self) {
        Poller::stop(self);
    }

    async fn stopped(&mut self) {
        Poller::stopped(self).await;
    }

    fn state(&self) -> PollerState {
        Poller::state(self)
    }
}

impl<K: WatchKind> PollerCore<K> {
    async fn run(self: Arc<Self>, token: CancellationToken) {
        while !token.is_cancelled() {
            let outcome = self.cycle(Utc::now()).await;

            let (next, wait) = match outcome {
                CycleOutcome::NothingDue => (PollerState::Paused, self.settings.pause),
                _ => (PollerState::Waiting, self.settings.wait),
            };
            self.transition(&token, next);

            if delay(&token, wait).await == Wake::Cancelled {
                break;
            }

            self.transition(&token, PollerState::Working);
        }
    }

    /// Publishes a state unless the loop owning `token` has been stopped.
    ///
    /// The check happens under the channel lock; `stop` cancels before publishing
    /// `Stopped`, so a stopped loop never overwrites it.
    fn transition(&self, token: &CancellationToken, next: PollerState) {
        self.state.send_if_modified(|state| {
            if token.is_cancelled() || *state == next {
                return false;
            }
            *state = next;
            true
        });
    }

    async fn cycle(&self, now: DateTime<Utc>) -> CycleOutcome {
        let candidates = match self.kind.select(&self.ctx, now).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!("{} poller failed to select due entities: {}", K::NAME, e);
                return CycleOutcome::StoreFailed;
            }
        };

        if candidates.is_empty() {
            tracing::debug!("No {} entities due", K::NAME);
            return CycleOutcome::NothingDue;
        }

        let fetch = self.kind.fetch(&self.ctx, &candidates);
        let fetched = match tokio::time::timeout(self.settings.fetch_timeout, fetch).await {
            Ok(Ok(fetched)) => fetched,
            Ok(Err(e)) => return self.fetch_failed(&candidates, now, e).await,
            Err(_) => {
                let e = SteamError::Timeout(self.settings.fetch_timeout);
                return self.fetch_failed(&candidates, now, e).await;
            }
        };

        let mut outbox = Vec::new();
        let applied = self
            .kind
            .apply(&self.ctx, candidates, fetched, now, &mut outbox)
            .await;

        let notifications = outbox.len();
        for notification in outbox {
            self.queue.enqueue(notification).await;
        }

        match applied {
            Ok(()) => {
                tracing::debug!(
                    "{} poller cycle enqueued {} notifications",
                    K::NAME,
                    notifications
                );
                CycleOutcome::Processed { notifications }
            }
            Err(e) => {
                tracing::error!("{} poller failed to apply fetched state: {}", K::NAME, e);
                CycleOutcome::StoreFailed
            }
        }
    }

    async fn fetch_failed(
        &self,
        candidates: &[K::Candidate],
        now: DateTime<Utc>,
        error: SteamError,
    ) -> CycleOutcome {
        tracing::warn!("{} poller fetch failed: {}", K::NAME, error);

        if let Err(e) = self.kind.on_fetch_failed(&self.ctx, candidates, now).await {
            tracing::error!("{} poller failed to record the failed fetch: {}", K::NAME, e);
        }

        CycleOutcome::FetchFailed
    }
}
