use super::*;

/// Tests counting news watchers per app.
///
/// Verifies that inactive watchers and watchers of other types are not counted.
///
/// Expected: Ok with 2 watchers for the first app, the second app omitted
#[tokio::test]
async fn counts_active_watchers_of_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let watched = factory::create_app(db).await?;
    let other = factory::create_app(db).await?;

    factory::create_watcher(db, "news", watched.id, &channel.id).await?;
    factory::create_watcher(db, "news", watched.id, &channel.id).await?;
    WatcherFactory::new(db, "news", watched.id, &channel.id)
        .inactive(true)
        .build()
        .await?;
    factory::create_watcher(db, "price", other.id, &channel.id).await?;

    let counts = WatcherRepository::new(db)
        .count_by_app(WatcherType::News)
        .await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get(&watched.id), Some(&2));

    Ok(())
}

/// Tests counting price watchers per price target and guild currency.
///
/// Verifies that package and bundle watchers on the same app are counted under their own
/// target rather than the app.
///
/// Expected: Ok with one entry per (target, currency) pair
#[tokio::test]
async fn counts_price_watchers_per_currency() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (usd, _, usd_channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let (_, usd_other) = factory::helpers::create_channel_for_currency(db, usd.id).await?;
    let (eur, _, eur_channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;

    factory::create_watcher(db, "price", app.id, &usd_channel.id).await?;
    factory::create_watcher(db, "price", app.id, &usd_other.id).await?;
    factory::create_watcher(db, "price", app.id, &eur_channel.id).await?;
    WatcherFactory::new(db, "price", app.id, &usd_channel.id)
        .sub_id(Some(469))
        .build()
        .await?;
    WatcherFactory::new(db, "price", app.id, &usd_channel.id)
        .sub_id(Some(469))
        .bundle_id(Some(232))
        .build()
        .await?;

    let counts = WatcherRepository::new(db).count_by_price_target().await?;

    let sub = PriceTarget {
        kind: PriceKind::Sub,
        id: 469,
    };
    let bundle = PriceTarget {
        kind: PriceKind::Bundle,
        id: 232,
    };
    assert_eq!(counts.len(), 4);
    assert_eq!(counts.get(&(PriceTarget::app(app.id), usd.id)), Some(&2));
    assert_eq!(counts.get(&(PriceTarget::app(app.id), eur.id)), Some(&1));
    assert_eq!(counts.get(&(sub, usd.id)), Some(&1));
    assert_eq!(counts.get(&(bundle, usd.id)), Some(&1));

    Ok(())
}

/// Tests counting UGC watchers per item.
///
/// Expected: Ok with the item's active watcher count
#[tokio::test]
async fn counts_ugc_watchers_per_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;
    let ugc = factory::create_ugc(db, app.id).await?;

    WatcherFactory::new(db, "ugc", app.id, &channel.id)
        .ugc_id(Some(&ugc.id))
        .build()
        .await?;
    WatcherFactory::new(db, "ugc", app.id, &channel.id)
        .ugc_id(Some(&ugc.id))
        .inactive(true)
        .build()
        .await?;

    let counts = WatcherRepository::new(db).count_by_ugc().await?;

    assert_eq!(counts.get(&ugc.id), Some(&1));

    Ok(())
}
