use super::*;

/// Tests updating an existing destination replaces its fields.
///
/// Expected: Ok(Some) with the new name and unchanged id
#[tokio::test]
async fn replaces_fields() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);
    let created = repo.create(params("Gruene", "gruene")).await?;

    let updated = repo
        .update(created.id, params("Gruene Historic District", "gruene"))
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Gruene Historic District");
    assert_eq!(repo.get(created.id).await, Some(updated));

    Ok(())
}

/// Tests updating a destination that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_destination() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);

    let result = repo.update(42, params("Nowhere", "nowhere")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests changing a slug to one owned by another destination.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_slug_of_other_destination() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);
    repo.create(params("Luckenbach", "luckenbach")).await?;
    let other = repo.create(params("Comfort", "comfort")).await?;

    let result = repo.update(other.id, params("Comfort", "luckenbach")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
