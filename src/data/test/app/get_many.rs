use super::*;

/// Tests fetching several apps by id.
///
/// Expected: Ok with only the existing requested apps
#[tokio::test]
async fn returns_requested_apps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_app(db).await?;
    let second = factory::create_app(db).await?;
    factory::create_app(db).await?;

    let mut apps = AppRepository::new(db)
        .get_many(vec![first.id, second.id, -1])
        .await?;
    apps.sort_by_key(|app| app.id);

    let ids: Vec<i32> = apps.iter().map(|app| app.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests fetching with no ids.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::App)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app(db).await?;

    assert!(AppRepository::new(db).get_many(Vec::new()).await?.is_empty());

    Ok(())
}
