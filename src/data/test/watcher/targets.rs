use super::*;

/// Tests resolving delivery targets for an app.
///
/// Verifies that each active watcher yields its channel's webhook credentials and its
/// mentions in insertion order, while inactive watchers are skipped.
///
/// Expected: Ok with one target carrying a role and a user mention
#[tokio::test]
async fn resolves_webhook_and_mentions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;

    let watcher = WatcherFactory::new(db, "news", app.id, &channel.id)
        .name("Patch notes")
        .build()
        .await?;
    factory::create_mention(db, watcher.id, "111", "role").await?;
    factory::create_mention(db, watcher.id, "222", "user").await?;
    WatcherFactory::new(db, "news", app.id, &channel.id)
        .inactive(true)
        .build()
        .await?;

    let targets = WatcherRepository::new(db)
        .targets_for_app(app.id, WatcherType::News)
        .await?;

    assert_eq!(targets.len(), 1);
    let target = &targets[0];
    assert_eq!(target.watcher_id, watcher.id);
    assert_eq!(target.watcher_name, "Patch notes");
    assert_eq!(target.webhook_id, channel.webhook_id);
    assert_eq!(target.webhook_token, channel.webhook_token);
    assert_eq!(target.mentions.len(), 2);
    assert_eq!(target.mentions[0].mention_type, MentionType::Role);
    assert_eq!(target.mentions[1].entity_id, "222");
    assert_eq!(target.mention_content().as_deref(), Some("<@&111> <@222>"));

    Ok(())
}

/// Tests resolving price targets for one currency.
///
/// Expected: Ok with only the watcher in the matching currency's guild
#[tokio::test]
async fn price_targets_filter_by_guild_currency() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (usd, _, usd_channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let (_, _, eur_channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;

    let usd_watcher = factory::create_watcher(db, "price", app.id, &usd_channel.id).await?;
    factory::create_watcher(db, "price", app.id, &eur_channel.id).await?;

    let targets = WatcherRepository::new(db)
        .targets_for_price(PriceTarget::app(app.id), usd.id)
        .await?;

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].watcher_id, usd_watcher.id);
    assert!(targets[0].mentions.is_empty());
    assert_eq!(targets[0].mention_content(), None);

    Ok(())
}

/// Tests resolving price targets for a package.
///
/// Verifies that a package watcher is matched by its package id and that app watchers on
/// the same app are not.
///
/// Expected: Ok with only the package watcher
#[tokio::test]
async fn package_targets_match_sub_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (usd, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;

    factory::create_watcher(db, "price", app.id, &channel.id).await?;
    let package = WatcherFactory::new(db, "price", app.id, &channel.id)
        .sub_id(Some(469))
        .build()
        .await?;

    let targets = WatcherRepository::new(db)
        .targets_for_price(
            PriceTarget {
                kind: PriceKind::Sub,
                id: 469,
            },
            usd.id,
        )
        .await?;

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].watcher_id, package.id);

    Ok(())
}

/// Tests resolving targets for a UGC item.
///
/// Expected: Ok with the item's watcher only
#[tokio::test]
async fn ugc_targets_match_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_watcher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let app = factory::create_app(db).await?;
    let watched = factory::create_ugc(db, app.id).await?;
    let other = factory::create_ugc(db, app.id).await?;

    let watcher = WatcherFactory::new(db, "ugc", app.id, &channel.id)
        .ugc_id(Some(&watched.id))
        .build()
        .await?;
    WatcherFactory::new(db, "ugc", app.id, &channel.id)
        .ugc_id(Some(&other.id))
        .build()
        .await?;

    let targets = WatcherRepository::new(db).targets_for_ugc(&watched.id).await?;

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].watcher_id, watcher.id);

    Ok(())
}
