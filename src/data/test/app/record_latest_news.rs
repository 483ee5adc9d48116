use super::*;

/// Tests recording the newest article.
///
/// Verifies that the article id and check timestamp are both stored.
///
/// Expected: Ok with latest_news and last_checked_news updated
#[tokio::test]
async fn stores_article_and_check_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let app = factory::create_app(db).await?;

    AppRepository::new(db)
        .record_latest_news(app.id, "5123", now)
        .await?;

    let stored = entity::prelude::App::find_by_id(app.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.latest_news.as_deref(), Some("5123"));
    assert_eq!(stored.last_checked_news, Some(now));

    Ok(())
}

/// Tests touching the news check timestamp.
///
/// Expected: Ok with last_checked_news updated and latest_news untouched
#[tokio::test]
async fn touch_keeps_latest_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let app = factory::app::AppFactory::new(db)
        .latest_news(Some("42"))
        .build()
        .await?;

    AppRepository::new(db).touch_news(app.id, now).await?;

    let stored = entity::prelude::App::find_by_id(app.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.latest_news.as_deref(), Some("42"));
    assert_eq!(stored.last_checked_news, Some(now));

    Ok(())
}
