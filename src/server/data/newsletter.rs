use chrono::{DateTime, Utc};

use crate::server::{
    data::mem::MemStorage, error::AppError, model::newsletter::Subscription,
};

pub struct SubscriptionRepository<'a> {
    store: &'a MemStorage,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Gets every subscription, active or not, ordered by id
    pub async fn list(&self) -> Vec<Subscription> {
        self.store.read().await.subscriptions.all()
    }

    /// Finds a subscription by its normalized email address
    pub async fn find_by_email(&self, email: &str) -> Option<Subscription> {
        self.store
            .read()
            .await
            .subscriptions
            .values()
            .find(|subscription| subscription.email == email)
            .cloned()
    }

    /// Stores a new active subscription
    ///
    /// # Arguments
    /// - `email` - Address already trimmed and lowercased
    /// - `name` - Optional subscriber name
    /// - `now` - Subscription timestamp
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The stored subscription
    /// - `Err(AppError::Conflict)` - The address is already present
    pub async fn create(
        &self,
        email: String,
        name: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Subscription, AppError> {
        let mut tables = self.store.write().await;
        if tables.subscriptions.values().any(|s| s.email == email) {
            return Err(AppError::Conflict("Already subscribed".to_string()));
        }

        Ok(tables.subscriptions.insert_with(|id| Subscription {
            id,
            email,
            name,
            subscribed_at: now,
            active: true,
        }))
    }

    /// Marks an existing subscription active again, refreshing its timestamp and,
    /// when given, its name
    pub async fn reactivate(
        &self,
        id: i32,
        name: Option<String>,
        now: DateTime<Utc>,
    ) -> Option<Subscription> {
        let mut tables = self.store.write().await;
        let subscription = tables.subscriptions.get_mut(id)?;

        subscription.active = true;
        subscription.subscribed_at = now;
        if name.is_some() {
            subscription.name = name;
        }

        Some(subscription.clone())
    }

    pub async fn deactivate(&self, id: i32) -> Option<Subscription> {
        let mut tables = self.store.write().await;
        let subscription = tables.subscriptions.get_mut(id)?;
        subscription.active = false;

        Some(subscription.clone())
    }

    pub async fn delete(&self, id: i32) -> bool {
        self.store.write().await.subscriptions.remove(id)
    }
}
