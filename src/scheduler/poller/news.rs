//! News poller: announces the newest article of watched apps.
//!
//! One app is checked per cycle. An article is announced when its `gid` differs from the
//! app's recorded latest article and it has not been stored before. The app is marked
//! checked whether or not anything new was found, and also when its news could not be
//! fetched, so an app without news or with a failing feed does not stay at the top of the
//! queue.

use chrono::{DateTime, Utc};
use serenity::async_trait;

use super::{PollContext, WatchKind};
use crate::{
    data::{app::AppRepository, app_news::AppNewsRepository, watcher::WatcherRepository},
    error::{steam::SteamError, AppError},
    model::{app::App, news::NewsItem, notification::QueuedNotification, watcher::WatcherType},
    scheduler::{
        notification,
        priority::{self, Candidate},
    },
};

pub struct NewsWatch;

#[async_trait]
impl WatchKind for NewsWatch {
    type Candidate = App;
    type Fetched = Option<NewsItem>;

    const NAME: &'static str = "News";

    async fn select(&self, ctx: &PollContext, now: DateTime<Utc>) -> Result<Vec<App>, AppError> {
        let counts = WatcherRepository::new(&ctx.db)
            .count_by_app(WatcherType::News)
            .await?;
        let average = priority::average_watcher_count(counts.values().copied());

        let apps = AppRepository::new(&ctx.db)
            .due_for_news(now, ctx.interval_hours)
            .await?;

        let candidates = apps
            .into_iter()
            .map(|app| Candidate {
                watcher_count: counts.get(&app.id).copied().unwrap_or(0),
                last_checked: app.last_checked_news,
                entity: app,
            })
            .collect();

        Ok(priority::rank(candidates, now, ctx.interval_hours, average)
            .into_iter()
            .take(1)
            .map(|scored| scored.entity)
            .collect())
    }

    async fn fetch(
        &self,
        ctx: &PollContext,
        candidates: &[App],
    ) -> Result<Option<NewsItem>, SteamError> {
        match candidates.first() {
            Some(app) => ctx.steam.get_latest_news(app.id).await,
            None => Ok(None),
        }
    }

    async fn apply(
        &self,
        ctx: &PollContext,
        candidates: Vec<App>,
        fetched: Option<NewsItem>,
        now: DateTime<Utc>,
        outbox: &mut Vec<QueuedNotification>,
    ) -> Result<(), AppError> {
        let Some(app) = candidates.into_iter().next() else {
            return Ok(());
        };
        let app_repo = AppRepository::new(&ctx.db);

        let item = match fetched {
            Some(item) if app.latest_news.as_deref() != Some(item.gid.as_str()) => item,
            _ => {
                app_repo.touch_news(app.id, now).await?;
                return Ok(());
            }
        };

        let news_repo = AppNewsRepository::new(&ctx.db);
        if news_repo.exists(&item.gid).await? {
            tracing::debug!(
                "News {} for app {} already recorded, not announcing again",
                item.gid,
                app.id
            );
            app_repo.record_latest_news(app.id, &item.gid, now).await?;
            return Ok(());
        }

        news_repo.create(app.id, &item).await?;
        app_repo.record_latest_news(app.id, &item.gid, now).await?;

        let targets = WatcherRepository::new(&ctx.db)
            .targets_for_app(app.id, WatcherType::News)
            .await?;

        tracing::info!(
            "New article \"{}\" for {} ({}), notifying {} watchers",
            item.title,
            app.name,
            app.id,
            targets.len()
        );

        outbox.extend(
            targets
                .iter()
                .map(|target| notification::news(&app, &item, target)),
        );

        Ok(())
    }

    async fn on_fetch_failed(
        &self,
        ctx: &PollContext,
        candidates: &[App],
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        if let Some(app) = candidates.first() {
            AppRepository::new(&ctx.db).touch_news(app.id, now).await?;
        }

        Ok(())
    }
}
