use super::*;

/// Tests the recorded-article check.
///
/// Expected: true only for a gid that was recorded
#[tokio::test]
async fn finds_recorded_gid_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::AppNews)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let app = factory::create_app(db).await?;
    factory::create_app_news(db, app.id, "111").await?;

    let repo = AppNewsRepository::new(db);
    assert!(repo.exists("111").await?);
    assert!(!repo.exists("222").await?);

    Ok(())
}
