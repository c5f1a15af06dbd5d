use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, EventInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{Event, EventFilter, EventParams},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct EventQuery {
    pub destination_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub category: Option<String>,
}

/// List local events ordered by start date.
///
/// # Arguments
/// - `state` - Application state containing the in-memory storage
/// - `query` - Optional filters; every filter given must match
///
/// # Returns
/// - `200 OK` - Matching events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("destination_id" = Option<i32>, Query, description = "Only events at this destination"),
        ("from" = Option<DateTime<Utc>>, Query, description = "Earliest start date, inclusive"),
        ("to" = Option<DateTime<Utc>>, Query, description = "Latest start date, exclusive"),
        ("category" = Option<String>, Query, description = "Category, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching events", body = Vec<EventDto>)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> impl IntoResponse {
    let filter = EventFilter {
        destination_id: query.destination_id,
        from: query.from,
        to: query.to,
        category: query.category.filter(|category| !category.trim().is_empty()),
    };

    let events = EventService::new(&state.store).list(&filter).await;

    Json(events.into_iter().map(Event::into_dto).collect::<Vec<_>>())
}

/// Create an event.
///
/// # Access Control
/// - `Admin` - Only admins can create events
///
/// # Returns
/// - `201 Created` - The stored event
/// - `400 Bad Request` - Blank title, end before start, or unknown destination
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventInputDto,
    responses(
        (status = 201, description = "Created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<EventInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.store)
        .create(EventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.store).get(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Replace an event's fields.
///
/// # Access Control
/// - `Admin` - Only admins can edit events
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Blank title, end before start, or unknown destination
/// - `404 Not Found` - No event with that id
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    request_body = EventInputDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<EventInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.store)
        .update(id, EventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    EventService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
