use super::*;

/// Tests a new subscription normalizes the address and sends the welcome email.
///
/// Expected: Created with a lowercase email, one SendGrid request
#[tokio::test]
async fn creates_subscription_and_sends_welcome() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/mail/send")
        .match_body(Matcher::PartialJsonString(
            r#"{"personalizations":[{"to":[{"email":"ana@example.com","name":"Ana"}]}]}"#
                .to_string(),
        ))
        .with_status(202)
        .expect(1)
        .create_async()
        .await;

    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = sendgrid_config(server.url());

    let outcome = NewsletterService::new(&store, &http_client, &config)
        .subscribe("  Ana@Example.com ", Some("Ana".to_string()))
        .await?;

    mock.assert_async().await;
    let SubscribeOutcome::Created(subscription) = outcome else {
        panic!("expected a new subscription");
    };
    assert_eq!(subscription.email, "ana@example.com");
    assert!(subscription.active);

    Ok(())
}

/// Tests a SendGrid failure doesn't fail the subscription.
///
/// Expected: Created and stored
#[tokio::test]
async fn welcome_failure_is_swallowed() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/mail/send")
        .with_status(500)
        .create_async()
        .await;

    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = sendgrid_config(server.url());
    let service = NewsletterService::new(&store, &http_client, &config);

    let outcome = service.subscribe("ana@example.com", None).await?;

    assert!(matches!(outcome, SubscribeOutcome::Created(_)));
    assert_eq!(service.list().await.len(), 1);

    Ok(())
}

/// Tests subscribing an address that is already active.
///
/// Expected: Err(AppError::Conflict) regardless of case
#[tokio::test]
async fn rejects_active_duplicate() -> Result<(), AppError> {
    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let service = NewsletterService::new(&store, &http_client, &config);

    service.subscribe("ana@example.com", None).await?;
    let result = service.subscribe("ANA@example.com", None).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests subscribing again after unsubscribing.
///
/// Expected: Reactivated, same id, new name kept, no welcome email
#[tokio::test]
async fn reactivates_inactive_subscription() -> Result<(), AppError> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/mail/send")
        .with_status(202)
        .expect(1)
        .create_async()
        .await;

    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = sendgrid_config(server.url());
    let service = NewsletterService::new(&store, &http_client, &config);

    let first = service
        .subscribe("ana@example.com", None)
        .await?
        .into_subscription();
    service.unsubscribe("ana@example.com").await?;
    let outcome = service
        .subscribe("ana@example.com", Some("Ana".to_string()))
        .await?;

    mock.assert_async().await;
    let SubscribeOutcome::Reactivated(subscription) = outcome else {
        panic!("expected a reactivated subscription");
    };
    assert_eq!(subscription.id, first.id);
    assert_eq!(subscription.name.as_deref(), Some("Ana"));
    assert!(subscription.active);

    Ok(())
}

/// Tests malformed addresses are rejected before anything is stored.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_malformed_email() -> Result<(), AppError> {
    let store = MemStorage::new();
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let service = NewsletterService::new(&store, &http_client, &config);

    let result = service.subscribe("not-an-email", None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.list().await.is_empty());

    Ok(())
}
