use super::*;

/// Tests creating a published post stamps its publication time.
///
/// Expected: published_at equals the creation time
#[tokio::test]
async fn stamps_published_at_when_published() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = BlogPostRepository::new(&store);
    let now = Utc::now();

    let post = repo.create(params("river-days", true), now).await?;

    assert_eq!(post.published_at, Some(now));
    assert_eq!(post.created_at, now);

    Ok(())
}

/// Tests creating a draft leaves publication time unset.
///
/// Expected: published_at is None
#[tokio::test]
async fn leaves_draft_unpublished() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = BlogPostRepository::new(&store);

    let post = repo.create(params("draft", false), Utc::now()).await?;

    assert!(post.published_at.is_none());

    Ok(())
}

/// Tests creating two posts with the same slug.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = BlogPostRepository::new(&store);
    repo.create(params("peaches", true), Utc::now()).await?;

    let result = repo.create(params("peaches", false), Utc::now()).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
