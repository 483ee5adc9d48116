use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{data::due_condition, model::workshop::AppWorkshop};

/// Repository for the cached head of each app's workshop listings.
pub struct AppWorkshopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppWorkshopRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AppWorkshop>, DbErr> {
        let entity = entity::prelude::AppWorkshop::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.and_then(AppWorkshop::from_entity))
    }

    /// Gets workshop listings due for a check, skipping rows with an unknown listing value.
    pub async fn due(
        &self,
        now: DateTime<Utc>,
        interval_hours: u32,
    ) -> Result<Vec<AppWorkshop>, DbErr> {
        let entities = entity::prelude::AppWorkshop::find()
            .filter(due_condition(
                entity::app_workshop::Column::LastChecked,
                now,
                interval_hours,
            ))
            .order_by_asc(entity::app_workshop::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter_map(AppWorkshop::from_entity)
            .collect())
    }

    /// Stores the newest submission of a listing and marks it as checked.
    pub async fn record_latest(
        &self,
        id: i32,
        file_id: &str,
        file_time: DateTime<Utc>,
        checked_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::AppWorkshop::update_many()
            .col_expr(
                entity::app_workshop::Column::LatestFileId,
                Expr::value(file_id.to_string()),
            )
            .col_expr(entity::app_workshop::Column::LatestTime, Expr::value(file_time))
            .col_expr(entity::app_workshop::Column::LastChecked, Expr::value(checked_at))
            .filter(entity::app_workshop::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn touch(&self, id: i32, checked_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::AppWorkshop::update_many()
            .col_expr(entity::app_workshop::Column::LastChecked, Expr::value(checked_at))
            .filter(entity::app_workshop::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
