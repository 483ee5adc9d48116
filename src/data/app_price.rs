//! Repository for cached store prices.
//!
//! Prices are cached per store entry (app, package or bundle) and currency, so a single
//! entry watched by guilds with different currencies has one row per currency, each polled
//! and diffed independently. Rows with an unknown kind are never returned.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    data::due_condition,
    model::price::{AppPrice, PriceOverview},
};

pub struct AppPriceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppPriceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AppPrice>, DbErr> {
        let entity = entity::prelude::AppPrice::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.and_then(AppPrice::from_entity))
    }

    /// Gets cached prices that are due for a check.
    ///
    /// # Arguments
    /// - `now`: Current time used to compute the due cutoff
    /// - `interval_hours`: Price poll interval in hours
    ///
    /// # Returns
    /// - `Ok(Vec<AppPrice>)`: Due price rows in ascending id order
    /// - `Err(DbErr)`: Database error
    pub async fn due(&self, now: DateTime<Utc>, interval_hours: u32) -> Result<Vec<AppPrice>, DbErr> {
        let entities = entity::prelude::AppPrice::find()
            .filter(due_condition(
                entity::app_price::Column::LastChecked,
                now,
                interval_hours,
            ))
            .order_by_asc(entity::app_price::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().filter_map(AppPrice::from_entity).collect())
    }

    /// Stores a freshly fetched price and marks the row as checked.
    pub async fn update_price(
        &self,
        id: i32,
        overview: &PriceOverview,
        checked_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::AppPrice::update_many()
            .col_expr(entity::app_price::Column::Price, Expr::value(overview.initial))
            .col_expr(
                entity::app_price::Column::DiscountedPrice,
                Expr::value(overview.final_price),
            )
            .col_expr(
                entity::app_price::Column::Discount,
                Expr::value(overview.discount_percent),
            )
            .col_expr(entity::app_price::Column::LastChecked, Expr::value(checked_at))
            .filter(entity::app_price::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks several price rows as checked in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows updated
    /// - `Err(DbErr)`: Database error
    pub async fn touch_many(&self, ids: Vec<i32>, checked_at: DateTime<Utc>) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::AppPrice::update_many()
            .col_expr(entity::app_price::Column::LastChecked, Expr::value(checked_at))
            .filter(entity::app_price::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a cached price row.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AppPrice::delete_many()
            .filter(entity::app_price::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
