use super::*;
use test_utils::factory::app::AppFactory;

/// Tests which apps are due for a news check.
///
/// Verifies that never-checked apps and apps checked at least one interval ago are
/// returned, while recently checked apps are not.
///
/// Expected: Ok with the never-checked and stale apps in id order
#[tokio::test]
async fn returns_never_checked_and_stale_apps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let never = AppFactory::new(db).id(10).build().await?;
    let stale = AppFactory::new(db)
        .id(20)
        .last_checked_news(Some(now - Duration::hours(2)))
        .build()
        .await?;
    AppFactory::new(db)
        .id(30)
        .last_checked_news(Some(now - Duration::minutes(10)))
        .build()
        .await?;

    let due = AppRepository::new(db).due_for_news(now, 1).await?;

    let ids: Vec<i32> = due.iter().map(|app| app.id).collect();
    assert_eq!(ids, vec![never.id, stale.id]);

    Ok(())
}

/// Tests the due boundary.
///
/// Expected: an app checked exactly one interval ago is due
#[tokio::test]
async fn app_checked_exactly_one_interval_ago_is_due() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    AppFactory::new(db)
        .last_checked_news(Some(now - Duration::hours(6)))
        .build()
        .await?;

    let due = AppRepository::new(db).due_for_news(now, 6).await?;

    assert_eq!(due.len(), 1);

    Ok(())
}
