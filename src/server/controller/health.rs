use axum::{extract::State, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let counts = state.store.counts().await;

    Json(HealthDto {
        status: "ok".to_string(),
        destinations: counts.destinations,
        events: counts.events,
        attractions: counts.attractions,
        cabins: counts.cabins,
        blog_posts: counts.blog_posts,
        subscriptions: counts.subscriptions,
    })
}
