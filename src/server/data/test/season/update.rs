use super::*;

/// Tests updating a season's text and stamping `updated_at`.
///
/// Expected: Ok(Some) with new fields and a later timestamp
#[tokio::test]
async fn updates_fields_and_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;

    let updated = SeasonRepository::new(db)
        .update(UpdateSeasonParams {
            id: season.id,
            name: "Summer".to_string(),
            description: "River season".to_string(),
            months: "June - August".to_string(),
            image_url: Some("/uploads/summer.jpg".to_string()),
            sort_order: 2,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Summer");
    assert_eq!(updated.months, "June - August");
    assert_eq!(updated.slug, season.slug);
    assert!(updated.updated_at >= season.updated_at);

    Ok(())
}

/// Tests updating a season that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_season() -> Result<(), AppError> {
    let test = TestBuilder::new().with_season_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SeasonRepository::new(db)
        .update(UpdateSeasonParams {
            id: 99,
            name: "Monsoon".to_string(),
            description: String::new(),
            months: String::new(),
            image_url: None,
            sort_order: 0,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
