use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::currency::Currency;

pub struct CurrencyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CurrencyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Currency>, DbErr> {
        let entity = entity::prelude::Currency::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Currency::from_entity))
    }

    /// Gets currencies by id, keyed by id.
    pub async fn get_many(&self, ids: Vec<i32>) -> Result<HashMap<i32, Currency>, DbErr> {
        let entities = entity::prelude::Currency::find()
            .filter(entity::currency::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.id, Currency::from_entity(entity)))
            .collect())
    }
}
