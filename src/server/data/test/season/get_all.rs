use super::*;

/// Tests seasons and activities come back ordered by `sort_order`.
///
/// Expected: seasons ordered 1, 2 and each season's activities ordered too
#[tokio::test]
async fn orders_seasons_and_activities() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fall = factory::season::SeasonFactory::new(db)
        .name("Fall")
        .sort_order(2)
        .build()
        .await?;
    let spring = factory::season::SeasonFactory::new(db)
        .name("Spring")
        .sort_order(1)
        .build()
        .await?;

    factory::seasonal_activity::SeasonalActivityFactory::new(db, spring.id)
        .title("Wildflowers")
        .sort_order(5)
        .build()
        .await?;
    factory::seasonal_activity::SeasonalActivityFactory::new(db, spring.id)
        .title("Wine trail")
        .sort_order(1)
        .build()
        .await?;
    factory::create_activity(db, fall.id).await?;

    let seasons = SeasonRepository::new(db).get_all().await?;

    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0].name, "Spring");
    assert_eq!(seasons[1].name, "Fall");

    let titles: Vec<&str> = seasons[0]
        .activities
        .iter()
        .map(|activity| activity.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Wine trail", "Wildflowers"]);
    assert_eq!(seasons[1].activities.len(), 1);

    Ok(())
}

/// Tests looking up a season by slug.
///
/// Expected: Some for the stored slug, None for an unknown slug
#[tokio::test]
async fn finds_by_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::season::SeasonFactory::new(db)
        .slug("winter")
        .build()
        .await?;

    let repo = SeasonRepository::new(db);

    assert!(repo.find_by_slug("winter").await?.is_some());
    assert!(repo.find_by_slug("monsoon").await?.is_none());

    Ok(())
}
