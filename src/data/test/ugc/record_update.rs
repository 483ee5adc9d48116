use super::*;

/// Tests storing an item update.
///
/// Expected: Ok with name, last update and check time stored
#[tokio::test]
async fn stores_name_and_update_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::Ugc)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let updated = now - Duration::hours(2);

    let app = factory::create_app(db).await?;
    let ugc = factory::create_ugc(db, app.id).await?;

    let repo = UgcRepository::new(db);
    repo.record_update(&ugc.id, "Renamed Map", updated, now)
        .await?;

    let stored = repo.get_by_id(&ugc.id).await?.unwrap();
    assert_eq!(stored.name, "Renamed Map");
    assert_eq!(stored.last_update, Some(updated));
    assert_eq!(stored.last_checked, Some(now));

    Ok(())
}

/// Tests batch touching and deleting items.
///
/// Expected: touched item gets a check time, deleted item is gone
#[tokio::test]
async fn touches_and_deletes_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::Ugc)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let app = factory::create_app(db).await?;
    let kept = factory::create_ugc(db, app.id).await?;
    let removed = factory::create_ugc(db, app.id).await?;

    let repo = UgcRepository::new(db);
    assert_eq!(repo.touch_many(vec![kept.id.clone()], now).await?, 1);
    assert_eq!(repo.delete(&removed.id).await?, 1);

    assert_eq!(
        repo.get_by_id(&kept.id).await?.unwrap().last_checked,
        Some(now)
    );
    assert!(repo.get_by_id(&removed.id).await?.is_none());

    Ok(())
}
