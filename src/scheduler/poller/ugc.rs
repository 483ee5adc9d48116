//! UGC poller: follows individual workshop items.
//!
//! Published file details accept many ids per request, so each cycle checks a batch of
//! the highest priority due items. Items Steam no longer returns, bans, or reports with a
//! failing result code are removed together with their watchers after a one-time notice.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serenity::async_trait;

use super::{PollContext, WatchKind};
use crate::{
    data::{ugc::UgcRepository, watcher::WatcherRepository},
    error::{steam::SteamError, AppError},
    model::{
        notification::QueuedNotification,
        ugc::{classify_ugc, PublishedFile, Ugc, UgcStatus},
    },
    scheduler::{
        notification,
        priority::{self, Candidate},
    },
};

pub struct UgcWatch;

#[async_trait]
impl WatchKind for UgcWatch {
    type Candidate = Ugc;
    type Fetched = Vec<PublishedFile>;

    const NAME: &'static str = "UGC";

    async fn select(&self, ctx: &PollContext, now: DateTime<Utc>) -> Result<Vec<Ugc>, AppError> {
        let counts = WatcherRepository::new(&ctx.db).count_by_ugc().await?;
        let average = priority::average_watcher_count(counts.values().copied());

        let due = UgcRepository::new(&ctx.db)
            .due(now, ctx.interval_hours)
            .await?;

        let candidates = due
            .into_iter()
            .map(|ugc| Candidate {
                watcher_count: counts.get(&ugc.id).copied().unwrap_or(0),
                last_checked: ugc.last_checked,
                entity: ugc,
            })
            .collect();

        Ok(priority::rank(candidates, now, ctx.interval_hours, average)
            .into_iter()
            .take(ctx.batch_size.max(1))
            .map(|scored| scored.entity)
            .collect())
    }

    async fn fetch(
        &self,
        ctx: &PollContext,
        candidates: &[Ugc],
    ) -> Result<Vec<PublishedFile>, SteamError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = candidates.iter().map(|ugc| ugc.id.clone()).collect();

        ctx.steam.get_published_file_details(&ids).await
    }

    async fn apply(
        &self,
        ctx: &PollContext,
        candidates: Vec<Ugc>,
        fetched: Vec<PublishedFile>,
        now: DateTime<Utc>,
        outbox: &mut Vec<QueuedNotification>,
    ) -> Result<(), AppError> {
        let ugc_repo = UgcRepository::new(&ctx.db);
        let watcher_repo = WatcherRepository::new(&ctx.db);
        let details: HashMap<&str, &PublishedFile> =
            fetched.iter().map(|file| (file.id.as_str(), file)).collect();
        let mut unchanged = Vec::new();

        for ugc in candidates {
            let file = details.get(ugc.id.as_str()).copied();

            match classify_ugc(&ugc, file) {
                UgcStatus::Unchanged => unchanged.push(ugc.id),
                UgcStatus::Updated => {
                    let Some(file) = file else {
                        continue;
                    };
                    let name = file.title.as_deref().unwrap_or(&ugc.name);
                    let updated = file.time_updated.unwrap_or(now);

                    ugc_repo.record_update(&ugc.id, name, updated, now).await?;

                    let targets = watcher_repo.targets_for_ugc(&ugc.id).await?;

                    tracing::info!(
                        "UGC {} ({}) was updated, notifying {} watchers",
                        name,
                        ugc.id,
                        targets.len()
                    );

                    outbox.extend(
                        targets
                            .iter()
                            .map(|target| notification::ugc_updated(&ugc, file, target)),
                    );
                }
                UgcStatus::Removed(removal) => {
                    let targets = watcher_repo.targets_for_ugc(&ugc.id).await?;

                    outbox.extend(
                        targets
                            .iter()
                            .map(|target| notification::ugc_removed(&ugc, &removal, target)),
                    );

                    let removed = watcher_repo.delete_for_ugc(&ugc.id).await?;
                    ugc_repo.delete(&ugc.id).await?;

                    tracing::info!(
                        "UGC {} ({}) removed: {} Deleted {} watchers",
                        ugc.name,
                        ugc.id,
                        removal.reason(),
                        removed
                    );
                }
            }
        }

        ugc_repo.touch_many(unchanged, now).await?;

        Ok(())
    }
}
