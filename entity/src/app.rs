use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app")]
pub struct Model {
    /// Steam app id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub icon: Option<String>,
    /// `gid` of the most recent news article seen for this app.
    pub latest_news: Option<String>,
    pub last_checked_news: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::app_news::Entity")]
    AppNews,
    #[sea_orm(has_many = "super::app_price::Entity")]
    AppPrice,
    #[sea_orm(has_many = "super::app_workshop::Entity")]
    AppWorkshop,
    #[sea_orm(has_many = "super::ugc::Entity")]
    Ugc,
    #[sea_orm(has_many = "super::watcher::Entity")]
    Watcher,
}

impl Related<super::app_news::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppNews.def()
    }
}

impl Related<super::app_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppPrice.def()
    }
}

impl Related<super::app_workshop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppWorkshop.def()
    }
}

impl Related<super::ugc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ugc.def()
    }
}

impl Related<super::watcher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Watcher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
