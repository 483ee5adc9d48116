//! Workshop poller: announces new or updated submissions in an app's workshop.
//!
//! Each app can have two cached listings, `new` (newest by publish date, followed by
//! `workshop_new` watchers) and `update` (most recently updated, followed by
//! `workshop_update` watchers). One listing is checked per cycle.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serenity::async_trait;

use super::{PollContext, WatchKind};
use crate::{
    data::{app::AppRepository, app_workshop::AppWorkshopRepository, watcher::WatcherRepository},
    error::{steam::SteamError, AppError},
    model::{
        app::App,
        notification::QueuedNotification,
        watcher::WatcherType,
        workshop::{is_new_submission, AppWorkshop, WorkshopFile, WorkshopListing},
    },
    scheduler::{
        notification,
        priority::{self, Candidate},
    },
};

pub struct WorkshopWatch;

#[derive(Debug, Clone)]
pub struct WorkshopCandidate {
    pub workshop: AppWorkshop,
    pub app: App,
}

/// Watcher type following a listing.
fn watcher_type(listing: WorkshopListing) -> WatcherType {
    match listing {
        WorkshopListing::New => WatcherType::WorkshopNew,
        WorkshopListing::Update => WatcherType::WorkshopUpdate,
    }
}

#[async_trait]
impl WatchKind for WorkshopWatch {
    type Candidate = WorkshopCandidate;
    type Fetched = Option<WorkshopFile>;

    const NAME: &'static str = "Workshop";

    async fn select(
        &self,
        ctx: &PollContext,
        now: DateTime<Utc>,
    ) -> Result<Vec<WorkshopCandidate>, AppError> {
        let watcher_repo = WatcherRepository::new(&ctx.db);
        let mut counts: HashMap<(i32, WorkshopListing), u64> = HashMap::new();
        for listing in [WorkshopListing::New, WorkshopListing::Update] {
            for (app_id, count) in watcher_repo.count_by_app(watcher_type(listing)).await? {
                counts.insert((app_id, listing), count);
            }
        }
        let average = priority::average_watcher_count(counts.values().copied());

        let due = AppWorkshopRepository::new(&ctx.db)
            .due(now, ctx.interval_hours)
            .await?;

        let ranked = priority::rank(
            due.into_iter()
                .map(|workshop| Candidate {
                    watcher_count: counts
                        .get(&(workshop.app_id, workshop.listing))
                        .copied()
                        .unwrap_or(0),
                    last_checked: workshop.last_checked,
                    entity: workshop,
                })
                .collect(),
            now,
            ctx.interval_hours,
            average,
        );

        let Some(top) = ranked.into_iter().next() else {
            return Ok(Vec::new());
        };
        let workshop = top.entity;

        let app = AppRepository::new(&ctx.db)
            .get_by_id(workshop.app_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Workshop listing {} references missing app {}",
                    workshop.id, workshop.app_id
                ))
            })?;

        Ok(vec![WorkshopCandidate { workshop, app }])
    }

    async fn fetch(
        &self,
        ctx: &PollContext,
        candidates: &[WorkshopCandidate],
    ) -> Result<Option<WorkshopFile>, SteamError> {
        match candidates.first() {
            Some(candidate) => {
                ctx.steam
                    .get_workshop_listing(candidate.workshop.app_id, candidate.workshop.listing)
                    .await
            }
            None => Ok(None),
        }
    }

    async fn apply(
        &self,
        ctx: &PollContext,
        candidates: Vec<WorkshopCandidate>,
        fetched: Option<WorkshopFile>,
        now: DateTime<Utc>,
        outbox: &mut Vec<QueuedNotification>,
    ) -> Result<(), AppError> {
        let Some(WorkshopCandidate { workshop, app }) = candidates.into_iter().next() else {
            return Ok(());
        };
        let workshop_repo = AppWorkshopRepository::new(&ctx.db);

        let file = match fetched {
            Some(file) if is_new_submission(&workshop, &file) => file,
            _ => {
                workshop_repo.touch(workshop.id, now).await?;
                return Ok(());
            }
        };

        workshop_repo
            .record_latest(workshop.id, &file.id, file.listing_time(workshop.listing), now)
            .await?;

        let targets = WatcherRepository::new(&ctx.db)
            .targets_for_app(app.id, watcher_type(workshop.listing))
            .await?;

        tracing::info!(
            "Workshop {} listing of {} ({}) has \"{}\" ({}), notifying {} watchers",
            workshop.listing.as_str(),
            app.name,
            app.id,
            file.title,
            file.id,
            targets.len()
        );

        outbox.extend(targets.iter().map(|target| {
            notification::workshop_submission(&app, workshop.listing, &file, target)
        }));

        Ok(())
    }
}
