use super::*;

/// Tests a destination created without a slug gets one derived from its name.
///
/// Expected: slug "luckenbachs-dance-hall", retrievable by slug
#[tokio::test]
async fn derives_slug_from_name() -> Result<(), AppError> {
    let store = MemStorage::new();

    let destination = create_destination(&store, "Luckenbach's Dance Hall", &[]).await?;

    assert_eq!(destination.slug, "luckenbachs-dance-hall");
    let found = DestinationService::new(&store)
        .get_by_slug("luckenbachs-dance-hall")
        .await?;
    assert_eq!(found.id, destination.id);

    Ok(())
}

/// Tests an explicit slug is normalized rather than replaced.
///
/// Expected: slug "hill-country-hub"
#[tokio::test]
async fn normalizes_explicit_slug() -> Result<(), AppError> {
    let store = MemStorage::new();
    let mut params = destination_params("Comfort", &[]);
    params.slug = "Hill Country HUB".to_string();

    let destination = DestinationService::new(&store).create(params).await?;

    assert_eq!(destination.slug, "hill-country-hub");

    Ok(())
}

/// Tests creating a destination whose name has no letters or digits.
///
/// Expected: Err(AppError::BadRequest) for a blank name and for punctuation only
#[tokio::test]
async fn rejects_unusable_names() -> Result<(), AppError> {
    let store = MemStorage::new();
    let service = DestinationService::new(&store);

    let blank = service.create(destination_params("", &[])).await;
    let punctuation = service.create(destination_params("!!!", &[])).await;

    assert!(matches!(blank, Err(AppError::BadRequest(_))));
    assert!(matches!(punctuation, Err(AppError::BadRequest(_))));
    assert!(service.list().await.is_empty());

    Ok(())
}

/// Tests a second destination with the same name collides on the derived slug.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_derived_slug() -> Result<(), AppError> {
    let store = MemStorage::new();
    create_destination(&store, "Wimberley", &[]).await?;

    let result = create_destination(&store, "wimberley", &[]).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the per-destination listings only return that destination's rows.
///
/// Expected: one event, one attraction and one cabin for the first destination
#[tokio::test]
async fn lists_related_content() -> Result<(), AppError> {
    let store = MemStorage::new();
    let wimberley = create_destination(&store, "Wimberley", &[]).await?;
    let kerrville = create_destination(&store, "Kerrville", &[]).await?;

    create_event(&store, "Market Day", utc(2026, 4, 4, 15), Some(wimberley.id)).await?;
    create_event(&store, "Folk Festival", utc(2026, 5, 28, 18), Some(kerrville.id)).await?;
    create_attraction(&store, wimberley.id, "Blue Hole", &["water"]).await?;
    create_attraction(&store, kerrville.id, "Riverside Trail", &["hiking"]).await?;
    create_cabin(&store, wimberley.id, "Cypress Creek Cottage").await?;

    let service = DestinationService::new(&store);

    let events = service.events(wimberley.id).await?;
    let attractions = service.attractions(wimberley.id).await?;
    let cabins = service.cabins(wimberley.id).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Market Day");
    assert_eq!(attractions.len(), 1);
    assert_eq!(attractions[0].name, "Blue Hole");
    assert_eq!(cabins.len(), 1);
    assert!(service.cabins(kerrville.id).await?.is_empty());

    Ok(())
}

/// Tests related listings and deletion for a destination that doesn't exist.
///
/// Expected: Err(AppError::NotFound) for each
#[tokio::test]
async fn missing_destination_is_not_found() -> Result<(), AppError> {
    let store = MemStorage::new();
    let service = DestinationService::new(&store);

    assert!(matches!(service.get(9).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.events(9).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.cabins(9).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.delete(9).await, Err(AppError::NotFound(_))));

    Ok(())
}
