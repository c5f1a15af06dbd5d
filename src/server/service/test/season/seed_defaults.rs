use super::*;

/// Tests seeding an empty season table.
///
/// Expected: four seasons in calendar order, each with activities
#[tokio::test]
async fn seeds_four_seasons() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SeasonService::new(db);

    let inserted = service.seed_defaults().await?;
    let seasons = service.list().await?;

    assert!(inserted);
    let slugs: Vec<&str> = seasons.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["spring", "summer", "fall", "winter"]);
    assert!(seasons.iter().all(|s| !s.activities.is_empty()));

    Ok(())
}

/// Tests seeding a table that already has seasons.
///
/// Expected: Ok(false) and no new rows
#[tokio::test]
async fn leaves_existing_seasons_alone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SeasonService::new(db);
    service.seed_defaults().await?;

    let inserted = service.seed_defaults().await?;

    assert!(!inserted);
    assert_eq!(service.list().await?.len(), 4);

    Ok(())
}
