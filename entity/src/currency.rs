use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "currency")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    /// Steam storefront country code used to request prices in this currency.
    pub country_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guild::Entity")]
    Guild,
    #[sea_orm(has_many = "super::app_price::Entity")]
    AppPrice,
}

impl Related<super::guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guild.def()
    }
}

impl Related<super::app_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppPrice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
