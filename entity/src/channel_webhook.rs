use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "channel_webhook")]
pub struct Model {
    /// Discord channel id the webhook posts into.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub guild_id: String,
    #[sea_orm(unique)]
    pub webhook_id: String,
    pub webhook_token: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild::Entity",
        from = "Column::GuildId",
        to = "super::guild::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Guild,
    #[sea_orm(has_many = "super::watcher::Entity")]
    Watcher,
}

impl Related<super::guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guild.def()
    }
}

impl Related<super::watcher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Watcher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
