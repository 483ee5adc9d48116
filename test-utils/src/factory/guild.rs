//! Guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::guild::Model,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with a unique guild id.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `currency_id` - Preferred currency of the guild
    pub fn new(db: &'a DatabaseConnection, currency_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::guild::Model {
                id: format!("{}", 100_000_000_000_000_000u64 + id),
                name: format!("Guild {}", id),
                currency_id,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            currency_id: ActiveValue::Set(self.entity.currency_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values using the given currency.
pub async fn create_guild(
    db: &DatabaseConnection,
    currency_id: i32,
) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db, currency_id).build().await
}
