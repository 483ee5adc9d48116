use crate::{
    data::app_price::AppPriceRepository,
    model::price::{PriceKind, PriceOverview, PriceTarget},
};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::app_price::AppPriceFactory};

mod delete;
mod due;
mod touch_many;
mod update_price;

async fn setup_price_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Currency)
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::AppPrice)
        .build()
        .await
        .unwrap()
}

async fn create_app_and_currency(
    db: &DatabaseConnection,
) -> Result<(entity::app::Model, entity::currency::Model), DbErr> {
    let app = factory::create_app(db).await?;
    let currency = factory::create_currency(db).await?;

    Ok((app, currency))
}
