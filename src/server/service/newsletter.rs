use chrono::Utc;

use crate::server::{
    config::Config,
    data::{mem::MemStorage, newsletter::SubscriptionRepository},
    error::AppError,
    model::newsletter::{SubscribeOutcome, Subscription},
    service::integration::sendgrid::SendGridClient,
};

/// Header row of the subscriber export.
pub const CSV_HEADER: &str = "email,name,subscribed_at,active";

pub struct NewsletterService<'a> {
    store: &'a MemStorage,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> NewsletterService<'a> {
    pub fn new(store: &'a MemStorage, http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            store,
            http_client,
            config,
        }
    }

    /// Subscribes an address, reactivating it when it was unsubscribed before
    ///
    /// New subscriptions get a welcome email. A failed send is logged and does not
    /// fail the subscription.
    ///
    /// # Returns
    /// - `Ok(SubscribeOutcome)` - Created or reactivated subscription
    /// - `Err(AppError::BadRequest)` - Malformed email address
    /// - `Err(AppError::Conflict)` - Address already has an active subscription
    pub async fn subscribe(
        &self,
        email: &str,
        name: Option<String>,
    ) -> Result<SubscribeOutcome, AppError> {
        let email = normalize_email(email)?;
        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        let repo = SubscriptionRepository::new(self.store);
        let now = Utc::now();

        if let Some(existing) = repo.find_by_email(&email).await {
            if existing.active {
                return Err(AppError::Conflict("Already subscribed".to_string()));
            }

            let subscription = repo
                .reactivate(existing.id, name, now)
                .await
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Subscription {} vanished during reactivation",
                        existing.id
                    ))
                })?;
            tracing::info!("Reactivated newsletter subscription {}", subscription.id);

            return Ok(SubscribeOutcome::Reactivated(subscription));
        }

        let subscription = repo.create(email, name, now).await?;
        tracing::info!("New newsletter subscription {}", subscription.id);
        self.send_welcome(&subscription).await;

        Ok(SubscribeOutcome::Created(subscription))
    }

    /// Marks the subscription for `email` inactive
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No subscription exists for the address
    pub async fn unsubscribe(&self, email: &str) -> Result<Subscription, AppError> {
        let email = normalize_email(email)?;
        let repo = SubscriptionRepository::new(self.store);

        let existing = repo
            .find_by_email(&email)
            .await
            .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

        repo.deactivate(existing.id)
            .await
            .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))
    }

    pub async fn list(&self) -> Vec<Subscription> {
        SubscriptionRepository::new(self.store).list().await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SubscriptionRepository::new(self.store).delete(id).await {
            return Err(AppError::NotFound(format!(
                "Subscription with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Renders every subscription as CSV, header first, ordered by id.
    pub async fn export_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        csv.push('\n');

        for subscription in self.list().await {
            csv.push_str(&csv_field(&subscription.email));
            csv.push(',');
            csv.push_str(&csv_field(subscription.name.as_deref().unwrap_or_default()));
            csv.push(',');
            csv.push_str(&subscription.subscribed_at.to_rfc3339());
            csv.push(',');
            csv.push_str(if subscription.active { "true" } else { "false" });
            csv.push('\n');
        }

        csv
    }

    async fn send_welcome(&self, subscription: &Subscription) {
        let Some(sendgrid) = &self.config.sendgrid else {
            tracing::warn!("SendGrid is not configured; skipping welcome email");
            return;
        };

        let client = SendGridClient::new(self.http_client, sendgrid);
        if let Err(e) = client
            .send_welcome(&subscription.email, subscription.name.as_deref())
            .await
        {
            tracing::warn!(
                "Failed to send welcome email for subscription {}: {}",
                subscription.id,
                e
            );
        }
    }
}

/// Trims and lowercases an address after a basic syntax check: exactly one `@`, a
/// non-empty local part and a dot inside the domain.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    let invalid = || AppError::BadRequest("Invalid email address".to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let has_inner_dot = domain.contains('.') && domain.split('.').all(|part| !part.is_empty());
    if !has_inner_dot {
        return Err(invalid());
    }

    Ok(email)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
