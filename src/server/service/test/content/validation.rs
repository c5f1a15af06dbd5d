use crate::server::{
    model::blog::BlogPostParams,
    service::blog::BlogService,
};

use super::*;

/// Tests an event ending before it starts.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_event_ending_before_start() -> Result<(), AppError> {
    let store = MemStorage::new();
    let mut params = event_params("Backwards", utc(2026, 6, 2, 12), None);
    params.end_date = Some(utc(2026, 6, 1, 12));

    let result = EventService::new(&store).create(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(store.read().await.events.is_empty());

    Ok(())
}

/// Tests an event that ends exactly when it starts.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_zero_length_event() -> Result<(), AppError> {
    let store = MemStorage::new();
    let mut params = event_params("Instant", utc(2026, 6, 2, 12), None);
    params.end_date = Some(params.start_date);

    EventService::new(&store).create(params).await?;

    Ok(())
}

/// Tests rows referencing a destination id that doesn't exist.
///
/// Expected: Err(AppError::BadRequest) for event, attraction and cabin
#[tokio::test]
async fn rejects_unknown_destination_reference() -> Result<(), AppError> {
    let store = MemStorage::new();

    let event = create_event(&store, "Orphan", utc(2026, 6, 2, 12), Some(42)).await;
    let attraction = create_attraction(&store, 42, "Orphan Falls", &[]).await;
    let cabin = create_cabin(&store, 42, "Orphan Cabin").await;

    assert!(matches!(event, Err(AppError::BadRequest(_))));
    assert!(matches!(attraction, Err(AppError::BadRequest(_))));
    assert!(matches!(cabin, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests cabin ratings at and beyond the allowed bounds.
///
/// Expected: 0.0 and 5.0 accepted, 5.5 and -1.0 rejected
#[tokio::test]
async fn enforces_cabin_rating_bounds() -> Result<(), AppError> {
    let store = MemStorage::new();
    let destination = create_destination(&store, "Wimberley", &[]).await?;
    let service = CabinService::new(&store);

    for rating in [0.0, 5.0] {
        let mut params = cabin_params(destination.id, "Edge Cabin");
        params.rating = Some(rating);
        service.create(params).await?;
    }
    for rating in [5.5, -1.0] {
        let mut params = cabin_params(destination.id, "Bad Cabin");
        params.rating = Some(rating);
        let result = service.create(params).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests updating an event that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_missing_event_is_not_found() -> Result<(), AppError> {
    let store = MemStorage::new();

    let result = EventService::new(&store)
        .update(3, event_params("Ghost", utc(2026, 6, 2, 12), None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

fn post_params(title: &str, published: bool) -> BlogPostParams {
    BlogPostParams {
        title: title.to_string(),
        slug: String::new(),
        excerpt: None,
        content: "# Heading\n\nBody".to_string(),
        author: "Editor".to_string(),
        category: None,
        tags: Vec::new(),
        image_url: None,
        published,
    }
}

/// Tests public and admin blog listings.
///
/// Expected: drafts hidden from the public list, newest post first
#[tokio::test]
async fn lists_blog_posts_newest_first() -> Result<(), AppError> {
    let store = MemStorage::new();
    let service = BlogService::new(&store);

    let first = service.create(post_params("Spring Wildflowers", true)).await?;
    let second = service.create(post_params("Summer Swimming Holes", true)).await?;
    let draft = service.create(post_params("Fall Wine Trail", false)).await?;

    let public: Vec<i32> = service.list(false).await.iter().map(|p| p.id).collect();
    let admin: Vec<i32> = service.list(true).await.iter().map(|p| p.id).collect();

    assert_eq!(public, vec![second.id, first.id]);
    assert_eq!(admin.len(), 3);
    assert!(admin.contains(&draft.id));
    assert_eq!(second.slug, "summer-swimming-holes");

    Ok(())
}

/// Tests draft posts can't be read by slug publicly.
///
/// Expected: Err(AppError::NotFound) publicly, Ok for admins
#[tokio::test]
async fn hides_draft_by_slug() -> Result<(), AppError> {
    let store = MemStorage::new();
    let service = BlogService::new(&store);
    let draft = service.create(post_params("Fall Wine Trail", false)).await?;

    let public = service.get_by_slug(&draft.slug, false).await;
    let admin = service.get_by_slug(&draft.slug, true).await?;

    assert!(matches!(public, Err(AppError::NotFound(_))));
    assert_eq!(admin.id, draft.id);

    Ok(())
}
