use super::*;

/// Tests the CSV export lists every subscription under the header.
///
/// Expected: header plus one line per subscription, names quoted when needed
#[tokio::test]
async fn exports_all_subscriptions() -> Result<(), AppError> {
    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let service = NewsletterService::new(&store, &http_client, &config);

    service
        .subscribe("ana@example.com", Some("Doe, Ana".to_string()))
        .await?;
    service.subscribe("bo@example.com", None).await?;
    service.unsubscribe("bo@example.com").await?;

    let csv = service.export_csv().await;
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("ana@example.com,\"Doe, Ana\","));
    assert!(lines[1].ends_with(",true"));
    assert!(lines[2].starts_with("bo@example.com,,"));
    assert!(lines[2].ends_with(",false"));

    Ok(())
}

/// Tests deleting a subscription twice.
///
/// Expected: Ok then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_subscription() -> Result<(), AppError> {
    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let service = NewsletterService::new(&store, &http_client, &config);
    let subscription = service
        .subscribe("ana@example.com", None)
        .await?
        .into_subscription();

    service.delete(subscription.id).await?;
    let again = service.delete(subscription.id).await;

    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
