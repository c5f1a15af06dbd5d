use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        newsletter::{SubscribeDto, SubscriptionDto, UnsubscribeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::newsletter::{SubscribeOutcome, Subscription},
        service::newsletter::NewsletterService,
        state::AppState,
    },
};

/// Tag for grouping newsletter endpoints in OpenAPI documentation
pub static NEWSLETTER_TAG: &str = "newsletter";

/// Subscribe an email address to the newsletter.
///
/// New subscribers get a welcome email when SendGrid is configured. An address that
/// unsubscribed earlier is reactivated without another welcome email.
///
/// # Arguments
/// - `state` - Application state containing storage, HTTP client and config
/// - `payload` - Email address and optional name
///
/// # Returns
/// - `201 Created` - New subscription
/// - `200 OK` - Earlier subscription reactivated
/// - `400 Bad Request` - Malformed email address
/// - `409 Conflict` - Address is already subscribed
#[utoipa::path(
    post,
    path = "/api/newsletter/subscribe",
    tag = NEWSLETTER_TAG,
    request_body = SubscribeDto,
    responses(
        (status = 201, description = "Subscribed", body = SubscriptionDto),
        (status = 200, description = "Subscription reactivated", body = SubscriptionDto),
        (status = 400, description = "Invalid email address", body = ErrorDto),
        (status = 409, description = "Already subscribed", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = NewsletterService::new(&state.store, &state.http_client, &state.config)
        .subscribe(&payload.email, payload.name)
        .await?;

    let status = match outcome {
        SubscribeOutcome::Created(_) => StatusCode::CREATED,
        SubscribeOutcome::Reactivated(_) => StatusCode::OK,
    };

    Ok((status, Json(outcome.into_subscription().into_dto())))
}

/// Unsubscribe an email address.
///
/// # Returns
/// - `200 OK` - The now inactive subscription
/// - `400 Bad Request` - Malformed email address
/// - `404 Not Found` - Address was never subscribed
#[utoipa::path(
    post,
    path = "/api/newsletter/unsubscribe",
    tag = NEWSLETTER_TAG,
    request_body = UnsubscribeDto,
    responses(
        (status = 200, description = "Unsubscribed", body = SubscriptionDto),
        (status = 400, description = "Invalid email address", body = ErrorDto),
        (status = 404, description = "Subscription not found", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(payload): Json<UnsubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let subscription = NewsletterService::new(&state.store, &state.http_client, &state.config)
        .unsubscribe(&payload.email)
        .await?;

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}

/// List every subscription, active or not.
///
/// # Access Control
/// - `Admin` - Only admins can see subscribers
#[utoipa::path(
    get,
    path = "/api/admin/newsletter",
    tag = NEWSLETTER_TAG,
    responses(
        (status = 200, description = "All subscriptions", body = Vec<SubscriptionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let subscriptions = NewsletterService::new(&state.store, &state.http_client, &state.config)
        .list()
        .await;

    Ok(Json(
        subscriptions
            .into_iter()
            .map(Subscription::into_dto)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/newsletter/{id}",
    tag = NEWSLETTER_TAG,
    params(
        ("id" = i32, Path, description = "Subscription id")
    ),
    responses(
        (status = 204, description = "Subscription deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Subscription not found", body = ErrorDto)
    ),
)]
pub async fn delete_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    NewsletterService::new(&state.store, &state.http_client, &state.config)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all subscriptions as CSV.
///
/// # Access Control
/// - `Admin` - Only admins can export subscribers
///
/// # Returns
/// - `200 OK` - `text/csv` attachment with columns `email,name,subscribed_at,active`
#[utoipa::path(
    get,
    path = "/api/admin/newsletter/export",
    tag = NEWSLETTER_TAG,
    responses(
        (status = 200, description = "Subscriptions as CSV", body = String, content_type = "text/csv"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn export_subscriptions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let csv = NewsletterService::new(&state.store, &state.http_client, &state.config)
        .export_csv()
        .await;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"newsletter-subscribers.csv\"",
            ),
        ],
        csv,
    ))
}
