use super::*;

/// Tests storing the new head of a listing.
///
/// Expected: Ok with file id, file time and check time stored
#[tokio::test]
async fn stores_latest_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::AppWorkshop)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let file_time = now - Duration::minutes(30);

    let app = factory::create_app(db).await?;
    let workshop = factory::create_app_workshop(db, app.id, "new").await?;

    let repo = AppWorkshopRepository::new(db);
    repo.record_latest(workshop.id, "777", file_time, now).await?;

    let stored = repo.get_by_id(workshop.id).await?.unwrap();
    assert_eq!(stored.latest_file_id.as_deref(), Some("777"));
    assert_eq!(stored.latest_time, Some(file_time));
    assert_eq!(stored.last_checked, Some(now));

    Ok(())
}

/// Tests touching a listing.
///
/// Expected: Ok with only the check time changed
#[tokio::test]
async fn touch_keeps_cached_head() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::AppWorkshop)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let file_time = now - Duration::days(1);

    let app = factory::create_app(db).await?;
    let workshop = AppWorkshopFactory::new(db, app.id, "update")
        .latest("555", file_time)
        .build()
        .await?;

    let repo = AppWorkshopRepository::new(db);
    repo.touch(workshop.id, now).await?;

    let stored = repo.get_by_id(workshop.id).await?.unwrap();
    assert_eq!(stored.latest_file_id.as_deref(), Some("555"));
    assert_eq!(stored.latest_time, Some(file_time));
    assert_eq!(stored.last_checked, Some(now));

    Ok(())
}
