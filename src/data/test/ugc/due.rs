use super::*;

/// Tests which UGC items are due.
///
/// Expected: Ok with the never-checked and stale items only
#[tokio::test]
async fn returns_never_checked_and_stale_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::Ugc)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let app = factory::create_app(db).await?;
    let never = UgcFactory::new(db, app.id).id("100").build().await?;
    let stale = UgcFactory::new(db, app.id)
        .id("200")
        .last_checked(Some(now - Duration::hours(25)))
        .build()
        .await?;
    UgcFactory::new(db, app.id)
        .id("300")
        .last_checked(Some(now - Duration::hours(1)))
        .build()
        .await?;

    let due = UgcRepository::new(db).due(now, 24).await?;

    let ids: Vec<&str> = due.iter().map(|ugc| ugc.id.as_str()).collect();
    assert_eq!(ids, vec![never.id.as_str(), stale.id.as_str()]);

    Ok(())
}
