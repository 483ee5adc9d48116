use super::*;

/// Tests which workshop listings are due.
///
/// Verifies that both listings of an app are returned independently and that rows with
/// an unknown listing value are skipped.
///
/// Expected: Ok with the new and update listings, the unknown listing excluded
#[tokio::test]
async fn returns_due_listings_with_known_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::AppWorkshop)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let app = factory::create_app(db).await?;
    factory::create_app_workshop(db, app.id, "new").await?;
    AppWorkshopFactory::new(db, app.id, "update")
        .last_checked(Some(now - Duration::hours(5)))
        .build()
        .await?;
    factory::create_app_workshop(db, app.id, "popular").await?;

    let due = AppWorkshopRepository::new(db).due(now, 1).await?;

    let listings: Vec<WorkshopListing> = due.iter().map(|w| w.listing).collect();
    assert_eq!(listings, vec![WorkshopListing::New, WorkshopListing::Update]);

    Ok(())
}
