//! Cancellable delays and task handles shared by the pollers and the notification queue.
//!
//! Every recurring loop in the scheduler is a spawned task that sleeps through [`delay`]
//! between iterations. Cancelling the loop's token wakes the sleep immediately, so a
//! stopped loop never leaves a pending timer behind.

use std::{future::Future, time::Duration};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Why a [`delay`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    Elapsed,
    Cancelled,
}

/// Sleeps for `duration` unless `token` is cancelled first.
///
/// Cancellation wins if both are ready at the same time.
pub async fn delay(token: &CancellationToken, duration: Duration) -> Wake {
    tokio::select! {
        biased;
        _ = token.cancelled() => Wake::Cancelled,
        _ = tokio::time::sleep(duration) => Wake::Elapsed,
    }
}

/// A spawned loop together with the token that stops it.
#[derive(Debug)]
pub struct TaskHandle {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl TaskHandle {
    /// Spawns `task` with a clone of `token`.
    pub fn spawn<F, Fut>(token: CancellationToken, task: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task(token.clone()));

        Self { token, handle }
    }

    /// Signals the task to stop at its next suspension point.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task to exit.
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            if e.is_panic() {
                tracing::error!("Scheduler task panicked: {}", e);
            }
        }
    }
}
