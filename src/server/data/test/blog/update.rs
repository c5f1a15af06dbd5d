use super::*;

/// Tests publishing a draft and editing it again later.
///
/// Verifies the first publication time is kept across later edits while
/// `updated_at` moves forward.
///
/// Expected: published_at stays at the first publish time
#[tokio::test]
async fn keeps_first_publication_time() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = BlogPostRepository::new(&store);
    let created_at = Utc::now();
    let post = repo.create(params("wildflowers", false), created_at).await?;

    let published_at = created_at + Duration::hours(1);
    let published = repo
        .update(post.id, params("wildflowers", true), published_at)
        .await?
        .unwrap();
    assert_eq!(published.published_at, Some(published_at));

    let edited_at = published_at + Duration::hours(1);
    let edited = repo
        .update(post.id, params("wildflowers", true), edited_at)
        .await?
        .unwrap();

    assert_eq!(edited.published_at, Some(published_at));
    assert_eq!(edited.updated_at, edited_at);
    assert_eq!(edited.created_at, created_at);

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = BlogPostRepository::new(&store);

    let result = repo.update(9, params("ghost", true), Utc::now()).await?;

    assert!(result.is_none());

    Ok(())
}
