use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "watcher_mention")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub watcher_id: i32,
    /// Discord role or user id.
    pub entity_id: String,
    /// Either `role` or `user`.
    pub mention_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::watcher::Entity",
        from = "Column::WatcherId",
        to = "super::watcher::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Watcher,
}

impl Related<super::watcher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Watcher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
