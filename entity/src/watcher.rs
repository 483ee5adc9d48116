use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "watcher")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// One of `news`, `price`, `workshop_new`, `workshop_update`, `ugc`.
    pub watcher_type: String,
    pub app_id: i32,
    pub ugc_id: Option<String>,
    /// Package a price watcher follows instead of the app.
    pub sub_id: Option<i32>,
    /// Bundle a price watcher follows instead of the app or package.
    pub bundle_id: Option<i32>,
    pub channel_id: String,
    pub inactive: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app::Entity",
        from = "Column::AppId",
        to = "super::app::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    App,
    #[sea_orm(
        belongs_to = "super::ugc::Entity",
        from = "Column::UgcId",
        to = "super::ugc::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Ugc,
    #[sea_orm(
        belongs_to = "super::channel_webhook::Entity",
        from = "Column::ChannelId",
        to = "super::channel_webhook::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ChannelWebhook,
    #[sea_orm(has_many = "super::watcher_mention::Entity")]
    WatcherMention,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl Related<super::ugc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ugc.def()
    }
}

impl Related<super::channel_webhook::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChannelWebhook.def()
    }
}

impl Related<super::watcher_mention::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WatcherMention.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
