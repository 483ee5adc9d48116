//! Watcher repository for the lookups pollers perform every cycle.
//!
//! Pollers need two things from watchers: how many active watchers follow each entity (to
//! score candidates) and where to deliver notifications when an entity changes. Price
//! watchers are keyed by price target and currency, where the currency comes from the guild
//! that owns the watcher's channel.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::{
    price::{PriceKind, PriceTarget},
    watcher::{Mention, MentionType, WatcherTarget, WatcherType},
};

pub struct WatcherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WatcherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts active watchers of one type per app.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, u64>)`: App id to watcher count, apps without watchers omitted
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_app(
        &self,
        watcher_type: WatcherType,
    ) -> Result<HashMap<i32, u64>, DbErr> {
        let mut counts = HashMap::new();

        for watcher in self.active_of_type(watcher_type).await? {
            *counts.entry(watcher.app_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Counts active UGC watchers per published file id.
    pub async fn count_by_ugc(&self) -> Result<HashMap<String, u64>, DbErr> {
        let mut counts = HashMap::new();

        for watcher in self.active_of_type(WatcherType::Ugc).await? {
            if let Some(ugc_id) = watcher.ugc_id {
                *counts.entry(ugc_id).or_insert(0) += 1;
            }
        }

        Ok(counts)
    }

    /// Counts active price watchers per `(price target, currency id)`.
    ///
    /// The currency of a watcher is the currency of the guild owning its channel; watchers
    /// whose channel or guild cannot be resolved are not counted.
    pub async fn count_by_price_target(
        &self,
    ) -> Result<HashMap<(PriceTarget, i32), u64>, DbErr> {
        let watchers = self.active_of_type(WatcherType::Price).await?;
        let currencies = self
            .currency_by_channel(watchers.iter().map(|w| w.channel_id.clone()).collect())
            .await?;

        let mut counts = HashMap::new();
        for watcher in watchers {
            if let Some(currency_id) = currencies.get(&watcher.channel_id) {
                *counts
                    .entry((price_target(&watcher), *currency_id))
                    .or_insert(0) += 1;
            }
        }

        Ok(counts)
    }

    /// Gets delivery targets for the active watchers of one type on an app.
    pub async fn targets_for_app(
        &self,
        app_id: i32,
        watcher_type: WatcherType,
    ) -> Result<Vec<WatcherTarget>, DbErr> {
        let watchers = entity::prelude::Watcher::find()
            .filter(entity::watcher::Column::AppId.eq(app_id))
            .filter(entity::watcher::Column::WatcherType.eq(watcher_type.as_str()))
            .filter(entity::watcher::Column::Inactive.eq(false))
            .order_by_asc(entity::watcher::Column::Id)
            .all(self.db)
            .await?;

        self.targets(watchers).await
    }

    /// Gets delivery targets for the active price watchers of a store entry in guilds
    /// using the given currency.
    pub async fn targets_for_price(
        &self,
        target: PriceTarget,
        currency_id: i32,
    ) -> Result<Vec<WatcherTarget>, DbErr> {
        let watchers = self.price_watchers(target, currency_id, true).await?;

        self.targets(watchers).await
    }

    /// Gets delivery targets for the active watchers of a UGC item.
    pub async fn targets_for_ugc(&self, ugc_id: &str) -> Result<Vec<WatcherTarget>, DbErr> {
        let watchers = entity::prelude::Watcher::find()
            .filter(entity::watcher::Column::UgcId.eq(ugc_id))
            .filter(entity::watcher::Column::WatcherType.eq(WatcherType::Ugc.as_str()))
            .filter(entity::watcher::Column::Inactive.eq(false))
            .order_by_asc(entity::watcher::Column::Id)
            .all(self.db)
            .await?;

        self.targets(watchers).await
    }

    /// Deletes watchers and their mentions.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of watchers deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete_many(&self, watcher_ids: Vec<i32>) -> Result<u64, DbErr> {
        if watcher_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::WatcherMention::delete_many()
            .filter(entity::watcher_mention::Column::WatcherId.is_in(watcher_ids.clone()))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Watcher::delete_many()
            .filter(entity::watcher::Column::Id.is_in(watcher_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every price watcher of a store entry in guilds using the given currency,
    /// inactive ones included.
    pub async fn delete_for_price(
        &self,
        target: PriceTarget,
        currency_id: i32,
    ) -> Result<u64, DbErr> {
        let ids = self
            .price_watchers(target, currency_id, false)
            .await?
            .into_iter()
            .map(|w| w.id)
            .collect();

        self.delete_many(ids).await
    }

    /// Deletes every watcher of a UGC item, inactive ones included.
    pub async fn delete_for_ugc(&self, ugc_id: &str) -> Result<u64, DbErr> {
        let ids = entity::prelude::Watcher::find()
            .filter(entity::watcher::Column::UgcId.eq(ugc_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|w| w.id)
            .collect();

        self.delete_many(ids).await
    }

    async fn price_watchers(
        &self,
        target: PriceTarget,
        currency_id: i32,
        active_only: bool,
    ) -> Result<Vec<entity::watcher::Model>, DbErr> {
        let query = entity::prelude::Watcher::find()
            .filter(entity::watcher::Column::WatcherType.eq(WatcherType::Price.as_str()));
        let mut query = match target.kind {
            PriceKind::App => query
                .filter(entity::watcher::Column::AppId.eq(target.id))
                .filter(entity::watcher::Column::SubId.is_null())
                .filter(entity::watcher::Column::BundleId.is_null()),
            PriceKind::Sub => query
                .filter(entity::watcher::Column::SubId.eq(target.id))
                .filter(entity::watcher::Column::BundleId.is_null()),
            PriceKind::Bundle => query.filter(entity::watcher::Column::BundleId.eq(target.id)),
        };
        if active_only {
            query = query.filter(entity::watcher::Column::Inactive.eq(false));
        }
        let watchers = query
            .order_by_asc(entity::watcher::Column::Id)
            .all(self.db)
            .await?;

        let currencies = self
            .currency_by_channel(watchers.iter().map(|w| w.channel_id.clone()).collect())
            .await?;

        Ok(watchers
            .into_iter()
            .filter(|w| currencies.get(&w.channel_id) == Some(&currency_id))
            .collect())
    }

    async fn active_of_type(
        &self,
        watcher_type: WatcherType,
    ) -> Result<Vec<entity::watcher::Model>, DbErr> {
        entity::prelude::Watcher::find()
            .filter(entity::watcher::Column::WatcherType.eq(watcher_type.as_str()))
            .filter(entity::watcher::Column::Inactive.eq(false))
            .all(self.db)
            .await
    }

    /// Resolves the currency id of each channel through its guild.
    async fn currency_by_channel(
        &self,
        channel_ids: Vec<String>,
    ) -> Result<HashMap<String, i32>, DbErr> {
        if channel_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let channels = entity::prelude::ChannelWebhook::find()
            .filter(entity::channel_webhook::Column::Id.is_in(channel_ids))
            .all(self.db)
            .await?;

        let guild_ids: Vec<String> = channels.iter().map(|c| c.guild_id.clone()).collect();
        let guild_currencies: HashMap<String, i32> = entity::prelude::Guild::find()
            .filter(entity::guild::Column::Id.is_in(guild_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g.currency_id))
            .collect();

        Ok(channels
            .into_iter()
            .filter_map(|c| {
                guild_currencies
                    .get(&c.guild_id)
                    .map(|currency_id| (c.id, *currency_id))
            })
            .collect())
    }

    /// Joins watchers with their channel webhook and mentions.
    ///
    /// Watchers whose channel has no webhook registration are skipped.
    async fn targets(
        &self,
        watchers: Vec<entity::watcher::Model>,
    ) -> Result<Vec<WatcherTarget>, DbErr> {
        if watchers.is_empty() {
            return Ok(Vec::new());
        }

        let channel_ids: Vec<String> = watchers.iter().map(|w| w.channel_id.clone()).collect();
        let channels: HashMap<String, entity::channel_webhook::Model> =
            entity::prelude::ChannelWebhook::find()
                .filter(entity::channel_webhook::Column::Id.is_in(channel_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect();

        let watcher_ids: Vec<i32> = watchers.iter().map(|w| w.id).collect();
        let mut mentions: HashMap<i32, Vec<Mention>> = HashMap::new();
        for mention in entity::prelude::WatcherMention::find()
            .filter(entity::watcher_mention::Column::WatcherId.is_in(watcher_ids))
            .order_by_asc(entity::watcher_mention::Column::Id)
            .all(self.db)
            .await?
        {
            if let Some(mention_type) = MentionType::parse(&mention.mention_type) {
                mentions.entry(mention.watcher_id).or_default().push(Mention {
                    entity_id: mention.entity_id,
                    mention_type,
                });
            }
        }

        Ok(watchers
            .into_iter()
            .filter_map(|watcher| {
                let channel = channels.get(&watcher.channel_id)?;

                Some(WatcherTarget {
                    watcher_id: watcher.id,
                    watcher_name: watcher.name,
                    webhook_id: channel.webhook_id.clone(),
                    webhook_token: channel.webhook_token.clone(),
                    mentions: mentions.remove(&watcher.id).unwrap_or_default(),
                })
            })
            .collect())
    }
}

/// Store entry a price watcher follows: its bundle, else its package, else its app.
fn price_target(watcher: &entity::watcher::Model) -> PriceTarget {
    match (watcher.bundle_id, watcher.sub_id) {
        (Some(id), _) => PriceTarget {
            kind: PriceKind::Bundle,
            id,
        },
        (None, Some(id)) => PriceTarget {
            kind: PriceKind::Sub,
            id,
        },
        (None, None) => PriceTarget::app(watcher.app_id),
    }
}
