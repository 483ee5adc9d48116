use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{data::due_condition, model::ugc::Ugc};

/// Repository for watched user-generated content items.
pub struct UgcRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UgcRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Ugc>, DbErr> {
        let entity = entity::prelude::Ugc::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Ugc::from_entity))
    }

    /// Gets UGC items due for a check, in ascending id order.
    pub async fn due(&self, now: DateTime<Utc>, interval_hours: u32) -> Result<Vec<Ugc>, DbErr> {
        let entities = entity::prelude::Ugc::find()
            .filter(due_condition(
                entity::ugc::Column::LastChecked,
                now,
                interval_hours,
            ))
            .order_by_asc(entity::ugc::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ugc::from_entity).collect())
    }

    /// Stores the new name and update time of an item and marks it as checked.
    pub async fn record_update(
        &self,
        id: &str,
        name: &str,
        last_update: DateTime<Utc>,
        checked_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Ugc::update_many()
            .col_expr(entity::ugc::Column::Name, Expr::value(name.to_string()))
            .col_expr(entity::ugc::Column::LastUpdate, Expr::value(last_update))
            .col_expr(entity::ugc::Column::LastChecked, Expr::value(checked_at))
            .filter(entity::ugc::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks several items as checked in one statement.
    pub async fn touch_many(
        &self,
        ids: Vec<String>,
        checked_at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Ugc::update_many()
            .col_expr(entity::ugc::Column::LastChecked, Expr::value(checked_at))
            .filter(entity::ugc::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Ugc::delete_many()
            .filter(entity::ugc::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
