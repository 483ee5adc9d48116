use super::*;

/// Tests purging a deleted webhook.
///
/// Verifies that the channel registration, its watchers and their mentions are removed
/// while other channels are left alone.
///
/// Expected: Ok(1) with only the other channel's rows remaining
#[tokio::test]
async fn removes_channel_with_watchers_and_mentions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (currency, _, dead) = factory::helpers::create_channel_with_dependencies(db).await?;
    let (_, alive) = factory::helpers::create_channel_for_currency(db, currency.id).await?;
    let app = factory::create_app(db).await?;

    let dead_watcher = factory::create_watcher(db, "news", app.id, &dead.id).await?;
    factory::create_mention(db, dead_watcher.id, "10", "role").await?;
    let alive_watcher = factory::create_watcher(db, "news", app.id, &alive.id).await?;
    factory::create_mention(db, alive_watcher.id, "20", "user").await?;

    let purged = ChannelWebhookRepository::new(db)
        .purge_by_webhook_id(&dead.webhook_id)
        .await?;

    assert_eq!(purged, 1);
    assert!(entity::prelude::ChannelWebhook::find_by_id(dead.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Watcher::find_by_id(dead_watcher.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Watcher::find().count(db).await?, 1);
    assert_eq!(entity::prelude::WatcherMention::find().count(db).await?, 1);

    Ok(())
}

/// Tests purging an unknown webhook id.
///
/// Expected: Ok(0) with nothing deleted
#[tokio::test]
async fn unknown_webhook_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_channel_with_dependencies(db).await?;

    let purged = ChannelWebhookRepository::new(db)
        .purge_by_webhook_id("does-not-exist")
        .await?;

    assert_eq!(purged, 0);
    assert_eq!(entity::prelude::ChannelWebhook::find().count(db).await?, 1);

    Ok(())
}
