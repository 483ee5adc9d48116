use super::*;

/// Tests deleting a cached price row.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_price_row() -> Result<(), DbErr> {
    let test = setup_price_tables().await;
    let db = test.db.as_ref().unwrap();

    let (app, currency) = create_app_and_currency(db).await?;
    let price = factory::create_app_price(db, app.id, currency.id).await?;

    let deleted = AppPriceRepository::new(db).delete(price.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::AppPrice::find_by_id(price.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
