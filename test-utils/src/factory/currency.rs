//! Currency factory for creating test currency entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test currencies with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let eur = CurrencyFactory::new(&db)
///     .code("EUR")
///     .country_code("de")
///     .build()
///     .await?;
/// ```
pub struct CurrencyFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::currency::Model,
}

impl<'a> CurrencyFactory<'a> {
    /// Creates a new CurrencyFactory with a unique id and code.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::currency::Model {
                id: id as i32,
                code: format!("C{:02}", id),
                name: format!("Currency {}", id),
                country_code: "us".to_string(),
            },
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.entity.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the Steam storefront country code prices are requested with.
    pub fn country_code(mut self, country_code: impl Into<String>) -> Self {
        self.entity.country_code = country_code.into();
        self
    }

    /// Builds and inserts the currency entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::currency::Model)` - Created currency entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::currency::Model, DbErr> {
        entity::currency::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            code: ActiveValue::Set(self.entity.code),
            name: ActiveValue::Set(self.entity.name),
            country_code: ActiveValue::Set(self.entity.country_code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a currency with default values.
pub async fn create_currency(db: &DatabaseConnection) -> Result<entity::currency::Model, DbErr> {
    CurrencyFactory::new(db).build().await
}
