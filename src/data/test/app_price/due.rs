use super::*;

/// Tests which price rows are due.
///
/// Expected: Ok with never-checked and stale rows, recent rows excluded
#[tokio::test]
async fn returns_never_checked_and_stale_rows() -> Result<(), DbErr> {
    let test = setup_price_tables().await;
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let (app, currency) = create_app_and_currency(db).await?;
    let other = factory::create_app(db).await?;
    let recent = factory::create_app(db).await?;

    let never = factory::create_app_price(db, app.id, currency.id).await?;
    let stale = AppPriceFactory::new(db, other.id, currency.id)
        .last_checked(Some(now - Duration::hours(3)))
        .build()
        .await?;
    AppPriceFactory::new(db, recent.id, currency.id)
        .last_checked(Some(now))
        .build()
        .await?;

    let due = AppPriceRepository::new(db).due(now, 2).await?;

    let ids: Vec<i32> = due.iter().map(|price| price.id).collect();
    assert_eq!(ids, vec![never.id, stale.id]);

    Ok(())
}

/// Tests reading a bundle price row listed under an app.
///
/// Expected: Ok with the row's target carrying the bundle kind and id
#[tokio::test]
async fn bundle_row_keeps_its_target() -> Result<(), DbErr> {
    let test = setup_price_tables().await;
    let db = test.db.as_ref().unwrap();

    let (app, currency) = create_app_and_currency(db).await?;
    AppPriceFactory::new(db, app.id, currency.id)
        .target("bundle", 232)
        .build()
        .await?;

    let due = AppPriceRepository::new(db).due(Utc::now(), 2).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].app_id, app.id);
    assert_eq!(
        due[0].target,
        PriceTarget {
            kind: PriceKind::Bundle,
            id: 232,
        }
    );

    Ok(())
}
