use super::*;

/// Tests deleting an activity once and then again.
///
/// Expected: true then false
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (season, activities) = factory::helpers::create_season_with_activities(db, 2).await?;
    let repo = SeasonRepository::new(db);

    assert!(repo.delete_activity(activities[0].id).await?);
    assert!(!repo.delete_activity(activities[0].id).await?);

    let remaining = repo.get_by_id(season.id).await?.unwrap().activities;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, activities[1].id);

    Ok(())
}
