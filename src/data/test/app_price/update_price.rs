use super::*;

/// Tests storing a fetched price.
///
/// Expected: Ok with all price columns and the check time updated
#[tokio::test]
async fn stores_fetched_price() -> Result<(), DbErr> {
    let test = setup_price_tables().await;
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (app, currency) = create_app_and_currency(db).await?;
    let price = factory::create_app_price(db, app.id, currency.id).await?;

    AppPriceRepository::new(db)
        .update_price(
            price.id,
            &PriceOverview {
                initial: 2000,
                final_price: 1500,
                discount_percent: 25,
            },
            now,
        )
        .await?;

    let stored = AppPriceRepository::new(db)
        .get_by_id(price.id)
        .await?
        .unwrap();
    assert_eq!(stored.price, 2000);
    assert_eq!(stored.discounted_price, 1500);
    assert_eq!(stored.discount, 25);
    assert_eq!(stored.last_checked, Some(now));

    Ok(())
}
