use super::*;

/// Tests creating destinations assigns increasing ids starting at 1.
///
/// Expected: Ok with ids 1 and 2, listed in id order
#[tokio::test]
async fn assigns_sequential_ids() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);

    let first = repo.create(params("Wimberley", "wimberley")).await?;
    let second = repo.create(params("Kerrville", "kerrville")).await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let all = repo.list().await;
    assert_eq!(all, vec![first, second]);

    Ok(())
}

/// Tests creating a destination with a slug already in use.
///
/// Expected: Err(AppError::Conflict) and no row stored
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);

    repo.create(params("Wimberley", "wimberley")).await?;
    let result = repo.create(params("Wimberley Again", "wimberley")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.list().await.len(), 1);

    Ok(())
}
