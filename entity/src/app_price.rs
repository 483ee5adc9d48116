use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_price")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// App the priced entry is listed under.
    pub app_id: i32,
    /// One of `app`, `sub`, `bundle`.
    pub kind: String,
    /// Steam id of the app, package or bundle.
    pub target_id: i32,
    pub currency_id: i32,
    /// Base price in the currency's minor unit.
    pub price: i32,
    pub discounted_price: i32,
    /// Discount percentage, 0 when not on sale.
    pub discount: i32,
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
    #[sea_orm(
        belongs_to = "super::currency::Entity",
        from = "Column::CurrencyId",
        to = "super::currency::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Currency,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl Related<super::currency::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Currency.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
