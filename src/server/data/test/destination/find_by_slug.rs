use super::*;

/// Tests looking up a destination by its slug.
///
/// Expected: Some for a known slug, None otherwise
#[tokio::test]
async fn finds_exact_slug() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = DestinationRepository::new(&store);
    let created = repo.create(params("Johnson City", "johnson-city")).await?;

    assert_eq!(repo.find_by_slug("johnson-city").await, Some(created));
    assert_eq!(repo.find_by_slug("johnson").await, None);

    Ok(())
}
