//! App price factory for creating cached price rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating cached app prices with customizable fields.
///
/// Defaults to an undiscounted app price of `1000` minor units that has never been checked.
pub struct AppPriceFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::app_price::Model,
}

impl<'a> AppPriceFactory<'a> {
    /// Creates a new AppPriceFactory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `app_id` - App the price belongs to, also the priced target until changed
    /// - `currency_id` - Currency of the price
    pub fn new(db: &'a DatabaseConnection, app_id: i32, currency_id: i32) -> Self {
        Self {
            db,
            entity: entity::app_price::Model {
                id: 0,
                app_id,
                kind: "app".to_string(),
                target_id: app_id,
                currency_id,
                price: 1000,
                discounted_price: 1000,
                discount: 0,
                last_checked: None,
            },
        }
    }

    /// Prices a package or bundle listed under the app instead of the app itself.
    ///
    /// # Arguments
    /// - `kind` - `app`, `sub` or `bundle`
    /// - `target_id` - Steam id of the priced entry
    pub fn target(mut self, kind: &str, target_id: i32) -> Self {
        self.entity.kind = kind.to_string();
        self.entity.target_id = target_id;
        self
    }

    /// Sets the cached base price, discount percentage and discounted price.
    pub fn price(mut self, price: i32, discount: i32, discounted_price: i32) -> Self {
        self.entity.price = price;
        self.entity.discount = discount;
        self.entity.discounted_price = discounted_price;
        self
    }

    pub fn last_checked(mut self, checked: Option<DateTime<Utc>>) -> Self {
        self.entity.last_checked = checked;
        self
    }

    /// Builds and inserts the price entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::app_price::Model)` - Created price row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::app_price::Model, DbErr> {
        entity::app_price::ActiveModel {
            id: ActiveValue::NotSet,
            app_id: ActiveValue::Set(self.entity.app_id),
            kind: ActiveValue::Set(self.entity.kind),
            target_id: ActiveValue::Set(self.entity.target_id),
            currency_id: ActiveValue::Set(self.entity.currency_id),
            price: ActiveValue::Set(self.entity.price),
            discounted_price: ActiveValue::Set(self.entity.discounted_price),
            discount: ActiveValue::Set(self.entity.discount),
            last_checked: ActiveValue::Set(self.entity.last_checked),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a never-checked price row with default values.
pub async fn create_app_price(
    db: &DatabaseConnection,
    app_id: i32,
    currency_id: i32,
) -> Result<entity::app_price::Model, DbErr> {
    AppPriceFactory::new(db, app_id, currency_id).build().await
}
