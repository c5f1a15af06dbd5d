use super::*;

/// Tests storing a new subscription.
///
/// Expected: active subscription findable by email
#[tokio::test]
async fn stores_active_subscription() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = SubscriptionRepository::new(&store);

    let subscription = repo
        .create("ana@example.com".to_string(), Some("Ana".to_string()), Utc::now())
        .await?;

    assert!(subscription.active);
    assert_eq!(
        repo.find_by_email("ana@example.com").await,
        Some(subscription)
    );

    Ok(())
}

/// Tests storing the same address twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let store = MemStorage::new();
    let repo = SubscriptionRepository::new(&store);
    repo.create("ana@example.com".to_string(), None, Utc::now())
        .await?;

    let result = repo
        .create("ana@example.com".to_string(), None, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
