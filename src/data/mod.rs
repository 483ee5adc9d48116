//! Database repository layer for the watched entities.
//!
//! This module contains repository structs that handle the database operations pollers and
//! the notification queue need. Repositories use SeaORM entity models internally and return
//! domain models from `crate::model`, keeping entity models out of the scheduler.
//!
//! Together the repositories provide the entity store operations the scheduler relies on:
//! finding due entities, counting watchers per entity, updating cached state and check
//! timestamps, deleting invalid entities with their watchers, resolving watcher delivery
//! targets and purging dead webhook registrations.

pub mod app;
pub mod app_news;
pub mod app_price;
pub mod app_workshop;
pub mod channel_webhook;
pub mod currency;
pub mod ugc;
pub mod watcher;

#[cfg(test)]
mod test;

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ColumnTrait, Condition};

/// Condition matching rows never checked, or last checked at least `interval_hours` ago.
pub(crate) fn due_condition<C: ColumnTrait>(
    last_checked: C,
    now: DateTime<Utc>,
    interval_hours: u32,
) -> Condition {
    let cutoff = now - Duration::hours(i64::from(interval_hours));

    Condition::any()
        .add(last_checked.is_null())
        .add(last_checked.lte(cutoff))
}
