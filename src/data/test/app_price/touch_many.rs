use super::*;

/// Tests marking several rows as checked at once.
///
/// Expected: Ok(2) with only the given rows touched and prices unchanged
#[tokio::test]
async fn touches_only_given_rows() -> Result<(), DbErr> {
    let test = setup_price_tables().await;
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let currency = factory::create_currency(db).await?;
    let mut rows = Vec::new();
    for _ in 0..3 {
        let app = factory::create_app(db).await?;
        rows.push(factory::create_app_price(db, app.id, currency.id).await?);
    }

    let repo = AppPriceRepository::new(db);
    let touched = repo.touch_many(vec![rows[0].id, rows[2].id], now).await?;

    assert_eq!(touched, 2);
    let first = repo.get_by_id(rows[0].id).await?.unwrap();
    assert_eq!(first.last_checked, Some(now));
    assert_eq!(first.price, rows[0].price);
    assert!(repo.get_by_id(rows[1].id).await?.unwrap().last_checked.is_none());

    Ok(())
}

/// Tests touching no rows.
///
/// Expected: Ok(0)
#[tokio::test]
async fn touching_nothing_is_noop() -> Result<(), DbErr> {
    let test = setup_price_tables().await;
    let db = test.db.as_ref().unwrap();

    let touched = AppPriceRepository::new(db)
        .touch_many(Vec::new(), Utc::now())
        .await?;

    assert_eq!(touched, 0);

    Ok(())
}
