use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{data::due_condition, model::app::App};

/// Repository providing the news state of Steam apps.
pub struct AppRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an app by its Steam app id.
    ///
    /// # Returns
    /// - `Ok(Some(App))`: The app if found
    /// - `Ok(None)`: No app with that id
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, app_id: i32) -> Result<Option<App>, DbErr> {
        let entity = entity::prelude::App::find_by_id(app_id).one(self.db).await?;

        Ok(entity.map(App::from_entity))
    }

    /// Gets apps by id, in ascending id order.
    pub async fn get_many(&self, app_ids: Vec<i32>) -> Result<Vec<App>, DbErr> {
        let entities = entity::prelude::App::find()
            .filter(entity::app::Column::Id.is_in(app_ids))
            .order_by_asc(entity::app::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(App::from_entity).collect())
    }

    /// Gets apps whose news has never been checked or is older than the poll interval.
    ///
    /// # Arguments
    /// - `now`: Current time used to compute the due cutoff
    /// - `interval_hours`: News poll interval in hours
    ///
    /// # Returns
    /// - `Ok(Vec<App>)`: Due apps in ascending id order
    /// - `Err(DbErr)`: Database error
    pub async fn due_for_news(
        &self,
        now: DateTime<Utc>,
        interval_hours: u32,
    ) -> Result<Vec<App>, DbErr> {
        let entities = entity::prelude::App::find()
            .filter(due_condition(
                entity::app::Column::LastCheckedNews,
                now,
                interval_hours,
            ))
            .order_by_asc(entity::app::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(App::from_entity).collect())
    }

    /// Records the newest announced article and marks the app's news as checked.
    pub async fn record_latest_news(
        &self,
        app_id: i32,
        gid: &str,
        checked_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::App::update_many()
            .col_expr(entity::app::Column::LatestNews, Expr::value(gid.to_string()))
            .col_expr(entity::app::Column::LastCheckedNews, Expr::value(checked_at))
            .filter(entity::app::Column::Id.eq(app_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks the app's news as checked without changing the cached article.
    pub async fn touch_news(&self, app_id: i32, checked_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::App::update_many()
            .col_expr(entity::app::Column::LastCheckedNews, Expr::value(checked_at))
            .filter(entity::app::Column::Id.eq(app_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
