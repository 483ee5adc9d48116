use super::*;

/// Tests deleting watchers together with their mentions.
///
/// Expected: Ok(1) with the watcher and its mention removed
#[tokio::test]
async fn delete_many_removes_mentions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;
    let watcher = factory::create_watcher(db, "news", app.id, &channel.id).await?;
    factory::create_mention(db, watcher.id, "1", "role").await?;

    let repo = WatcherRepository::new(db);
    assert_eq!(repo.delete_many(Vec::new()).await?, 0);
    assert_eq!(repo.delete_many(vec![watcher.id]).await?, 1);

    assert_eq!(entity::prelude::Watcher::find().count(db).await?, 0);
    assert_eq!(entity::prelude::WatcherMention::find().count(db).await?, 0);

    Ok(())
}

/// Tests removing price watchers of a delisted app.
///
/// Verifies that inactive watchers in the currency are removed too, while watchers in
/// other currencies and bundle watchers on the same app are kept.
///
/// Expected: Ok(2) with the other currency's watcher and the bundle watcher remaining
#[tokio::test]
async fn delete_for_price_includes_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (usd, _, usd_channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let (_, _, eur_channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;

    factory::create_watcher(db, "price", app.id, &usd_channel.id).await?;
    WatcherFactory::new(db, "price", app.id, &usd_channel.id)
        .inactive(true)
        .build()
        .await?;
    let kept = factory::create_watcher(db, "price", app.id, &eur_channel.id).await?;
    let bundle = WatcherFactory::new(db, "price", app.id, &usd_channel.id)
        .bundle_id(Some(232))
        .build()
        .await?;

    let deleted = WatcherRepository::new(db)
        .delete_for_price(PriceTarget::app(app.id), usd.id)
        .await?;

    assert_eq!(deleted, 2);
    let remaining: Vec<i32> = entity::prelude::Watcher::find()
        .all(db)
        .await?
        .into_iter()
        .map(|w| w.id)
        .collect();
    assert_eq!(remaining, vec![kept.id, bundle.id]);

    Ok(())
}

/// Tests removing every watcher of a deleted UGC item.
///
/// Expected: Ok(2) including the inactive watcher
#[tokio::test]
async fn delete_for_ugc_includes_inactive() -> Result<(), DbErr> {
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

    let deleted = WatcherRepository::new(db).delete_for_ugc(&ugc.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::Watcher::find().count(db).await?, 0);

    Ok(())
}
