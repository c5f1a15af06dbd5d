use chrono::{DateTime, Utc};

use crate::model::newsletter::SubscriptionDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: i32,
    /// Trimmed, lowercase address; unique across subscriptions.
    pub email: String,
    pub name: Option<String>,
    pub subscribed_at: DateTime<Utc>,
    pub active: bool,
}

impl Subscription {
    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            id: self.id,
            email: self.email,
            name: self.name,
            subscribed_at: self.subscribed_at,
            active: self.active,
        }
    }
}

/// Outcome of a subscribe request, so callers know whether to send a welcome email.
#[derive(Debug, Clone, PartialEq)]
pub enum SubscribeOutcome {
    Created(Subscription),
    Reactivated(Subscription),
}

impl SubscribeOutcome {
    pub fn subscription(&self) -> &Subscription {
        match self {
            Self::Created(subscription) | Self::Reactivated(subscription) => subscription,
        }
    }

    pub fn into_subscription(self) -> Subscription {
        match self {
            Self::Created(subscription) | Self::Reactivated(subscription) => subscription,
        }
    }
}
