use super::*;

/// Tests deactivating then reactivating a subscription.
///
/// Expected: active again with a refreshed timestamp, name kept when none given
#[tokio::test]
async fn restores_inactive_subscription() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = SubscriptionRepository::new(&store);
    let subscribed_at = Utc::now();
    let subscription = repo
        .create("lee@example.com".to_string(), Some("Lee".to_string()), subscribed_at)
        .await?;

    let inactive = repo.deactivate(subscription.id).await.unwrap();
    assert!(!inactive.active);

    let later = subscribed_at + Duration::days(3);
    let active = repo.reactivate(subscription.id, None, later).await.unwrap();

    assert!(active.active);
    assert_eq!(active.subscribed_at, later);
    assert_eq!(active.name.as_deref(), Some("Lee"));

    Ok(())
}

/// Tests reactivating an unknown id.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let store = MemStorage::new();
    let repo = SubscriptionRepository::new(&store);

    assert!(repo.reactivate(3, None, Utc::now()).await.is_none());
}
