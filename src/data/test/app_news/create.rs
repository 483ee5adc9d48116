use super::*;

/// Tests recording a news article.
///
/// Expected: Ok with the article stored for the app
#[tokio::test]
async fn records_article_for_app() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::AppNews)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let app = factory::create_app(db).await?;
    let repo = AppNewsRepository::new(db);

    let created = repo.create(app.id, &news_item("9001")).await?;

    assert_eq!(created.app_id, app.id);
    assert_eq!(created.gid, "9001");
    assert_eq!(created.title, "Patch notes");

    let stored = repo.get_by_app_id(app.id).await?;
    assert_eq!(stored, vec![created]);

    Ok(())
}

/// Tests that a gid can only be recorded once.
///
/// Expected: Err on the second insert of the same gid
#[tokio::test]
async fn rejects_duplicate_gid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .with_table(entity::prelude::AppNews)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let app = factory::create_app(db).await?;
    let repo = AppNewsRepository::new(db);

    repo.create(app.id, &news_item("9001")).await?;
    let result = repo.create(app.id, &news_item("9001")).await;

    assert!(result.is_err());
    assert_eq!(repo.get_by_app_id(app.id).await?.len(), 1);

    Ok(())
}
