//! Price poller: tracks app, package and bundle prices per currency.
//!
//! Steam's price endpoints take many ids of one kind but a single storefront region, so each
//! cycle picks the currency and kind of the highest priority due row and fetches every due
//! row sharing both together, up to the batch size.
//!
//! A row whose entry is no longer sold in the currency (free to play, delisted, region
//! locked) is removed: its watchers are told once, then the watchers and the cached row
//! are deleted. A response Steam sends in an unexpected shape fails the fetch instead, so
//! nothing is removed on a malformed payload.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serenity::async_trait;

use super::{PollContext, WatchKind};
use crate::{
    data::{
        app::AppRepository, app_price::AppPriceRepository, currency::CurrencyRepository,
        watcher::WatcherRepository,
    },
    error::{steam::SteamError, AppError},
    model::{
        app::App,
        currency::Currency,
        notification::QueuedNotification,
        price::{classify_price_change, AppPrice, PriceLookup},
    },
    scheduler::{
        notification,
        priority::{self, Candidate},
    },
};

pub struct PriceWatch;

/// A due price row with the app and currency it belongs to.
#[derive(Debug, Clone)]
pub struct PriceCandidate {
    pub price: AppPrice,
    pub app: App,
    pub currency: Currency,
}

#[async_trait]
impl WatchKind for PriceWatch {
    type Candidate = PriceCandidate;
    type Fetched = HashMap<i32, PriceLookup>;

    const NAME: &'static str = "Price";

    async fn select(
        &self,
        ctx: &PollContext,
        now: DateTime<Utc>,
    ) -> Result<Vec<PriceCandidate>, AppError> {
        let counts = WatcherRepository::new(&ctx.db)
            .count_by_price_target()
            .await?;
        let average = priority::average_watcher_count(counts.values().copied());

        let due = AppPriceRepository::new(&ctx.db)
            .due(now, ctx.interval_hours)
            .await?;

        let ranked = priority::rank(
            due.into_iter()
                .map(|price| Candidate {
                    watcher_count: counts
                        .get(&(price.target, price.currency_id))
                        .copied()
                        .unwrap_or(0),
                    last_checked: price.last_checked,
                    entity: price,
                })
                .collect(),
            now,
            ctx.interval_hours,
            average,
        );

        let Some((currency_id, kind)) = ranked
            .first()
            .map(|top| (top.entity.currency_id, top.entity.target.kind))
        else {
            return Ok(Vec::new());
        };

        let batch: Vec<AppPrice> = ranked
            .into_iter()
            .map(|scored| scored.entity)
            .filter(|price| price.currency_id == currency_id && price.target.kind == kind)
            .take(ctx.batch_size.max(1))
            .collect();

        let currency = CurrencyRepository::new(&ctx.db)
            .get_by_id(currency_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Price rows reference missing currency {}",
                    currency_id
                ))
            })?;

        let apps: HashMap<i32, App> = AppRepository::new(&ctx.db)
            .get_many(batch.iter().map(|price| price.app_id).collect())
            .await?
            .into_iter()
            .map(|app| (app.id, app))
            .collect();

        Ok(batch
            .into_iter()
            .filter_map(|price| {
                let app = apps.get(&price.app_id)?.clone();
                Some(PriceCandidate {
                    price,
                    app,
                    currency: currency.clone(),
                })
            })
            .collect())
    }

    async fn fetch(
        &self,
        ctx: &PollContext,
        candidates: &[PriceCandidate],
    ) -> Result<HashMap<i32, PriceLookup>, SteamError> {
        let Some(first) = candidates.first() else {
            return Ok(HashMap::new());
        };

        let ids: Vec<i32> = candidates.iter().map(|c| c.price.target.id).collect();

        ctx.steam
            .get_prices(first.price.target.kind, &ids, &first.currency.country_code)
            .await
    }

    async fn apply(
        &self,
        ctx: &PollContext,
        candidates: Vec<PriceCandidate>,
        fetched: HashMap<i32, PriceLookup>,
        now: DateTime<Utc>,
        outbox: &mut Vec<QueuedNotification>,
    ) -> Result<(), AppError> {
        let price_repo = AppPriceRepository::new(&ctx.db);
        let watcher_repo = WatcherRepository::new(&ctx.db);
        let mut unchanged = Vec::new();

        for candidate in candidates {
            let PriceCandidate {
                price,
                app,
                currency,
            } = candidate;

            let name = price.target.display_name(&app.name);

            match fetched.get(&price.target.id) {
                Some(PriceLookup::Priced(overview)) => {
                    let change = classify_price_change(&price, overview);
                    if !change.is_change() {
                        unchanged.push(price.id);
                        continue;
                    }

                    price_repo.update_price(price.id, overview, now).await?;

                    let targets = watcher_repo
                        .targets_for_price(price.target, price.currency_id)
                        .await?;

                    tracing::info!(
                        "{} for {} in {}, notifying {} watchers",
                        change.title(),
                        name,
                        currency.code,
                        targets.len()
                    );

                    outbox.extend(targets.iter().map(|target| {
                        notification::price_changed(
                            &app, &currency, &price, overview, change, target,
                        )
                    }));
                }
                Some(PriceLookup::Unavailable) => {
                    let targets = watcher_repo
                        .targets_for_price(price.target, price.currency_id)
                        .await?;

                    outbox.extend(
                        targets
                            .iter()
                            .map(|target| {
                            notification::price_removed(&app, &price, &currency, target)
                        }),
                    );

                    let removed = watcher_repo
                        .delete_for_price(price.target, price.currency_id)
                        .await?;
                    price_repo.delete(price.id).await?;

                    tracing::info!(
                        "{} has no price in {}, removed {} watchers",
                        name,
                        currency.code,
                        removed
                    );
                }
                None => {
                    tracing::warn!(
                        "Steam omitted {} {} from the {} price response",
                        price.target.kind.as_str(),
                        price.target.id,
                        currency.code
                    );
                }
            }
        }

        price_repo.touch_many(unchanged, now).await?;

        Ok(())
    }
}
