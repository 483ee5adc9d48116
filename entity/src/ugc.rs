use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ugc")]
pub struct Model {
    /// Steam published file id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub app_id: i32,
    pub name: String,
    pub last_update: Option<DateTimeUtc>,
    pub last_checked: Option<DateTimeUtc>,
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
    #[sea_orm(has_many = "super::watcher::Entity")]
    Watcher,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl Related<super::watcher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Watcher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
