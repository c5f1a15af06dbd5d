use super::*;

/// Tests adding an activity to an existing season.
///
/// Expected: Ok with the activity linked to the season
#[tokio::test]
async fn adds_activity_to_season() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;
    let repo = SeasonRepository::new(db);

    let activity = repo
        .create_activity(season.id, activity_params("Peach picking", 0))
        .await?;

    assert_eq!(activity.season_id, season.id);
    let stored = repo.get_by_id(season.id).await?.unwrap();
    assert_eq!(stored.activities, vec![activity]);

    Ok(())
}

/// Tests adding an activity to a season that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_season() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SeasonRepository::new(db)
        .create_activity(7, activity_params("Nothing", 0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests editing an activity in place.
///
/// Expected: Ok(Some) with the new title, Ok(None) for unknown ids
#[tokio::test]
async fn updates_activity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;
    let activity = factory::create_activity(db, season.id).await?;
    let repo = SeasonRepository::new(db);

    let updated = repo
        .update_activity(activity.id, activity_params("Stargazing", 3))
        .await?
        .unwrap();

    assert_eq!(updated.title, "Stargazing");
    assert_eq!(updated.sort_order, 3);
    assert!(repo
        .update_activity(activity.id + 100, activity_params("x", 0))
        .await?
        .is_none());

    Ok(())
}
