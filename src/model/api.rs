use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Liveness report with the size of each in-memory collection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub destinations: usize,
    pub events: usize,
    pub attractions: usize,
    pub cabins: usize,
    pub blog_posts: usize,
    pub subscriptions: usize,
}
