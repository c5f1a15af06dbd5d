use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        attraction::AttractionDto,
        cabin::CabinDto,
        destination::{DestinationDto, DestinationInputDto},
        event::EventDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            attraction::Attraction, cabin::Cabin, destination::DestinationParams, event::Event,
        },
        service::destination::DestinationService,
        state::AppState,
    },
};

/// Tag for grouping destination endpoints in OpenAPI documentation
pub static DESTINATION_TAG: &str = "destination";

/// List all destinations ordered by id.
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    responses(
        (status = 200, description = "All destinations", body = Vec<DestinationDto>)
    ),
)]
pub async fn get_destinations(State(state): State<AppState>) -> impl IntoResponse {
    let destinations = DestinationService::new(&state.store).list().await;

    Json(
        destinations
            .into_iter()
            .map(|destination| destination.into_dto())
            .collect::<Vec<_>>(),
    )
}

/// Create a destination.
///
/// The slug is derived from the name when the request leaves it out.
///
/// # Access Control
/// - `Admin` - Only admins can create destinations
///
/// # Arguments
/// - `state` - Application state containing the in-memory storage
/// - `session` - User's session for authentication
/// - `payload` - Destination data
///
/// # Returns
/// - `201 Created` - The stored destination
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `409 Conflict` - Slug already used by another destination
#[utoipa::path(
    post,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    request_body = DestinationInputDto,
    responses(
        (status = 201, description = "Created destination", body = DestinationDto),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn create_destination(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DestinationInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let destination = DestinationService::new(&state.store)
        .create(DestinationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(destination.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 200, description = "Destination", body = DestinationDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let destination = DestinationService::new(&state.store).get(id).await?;

    Ok((StatusCode::OK, Json(destination.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/destinations/slug/{slug}",
    tag = DESTINATION_TAG,
    params(
        ("slug" = String, Path, description = "Destination slug")
    ),
    responses(
        (status = 200, description = "Destination", body = DestinationDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_destination_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let destination = DestinationService::new(&state.store)
        .get_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(destination.into_dto())))
}

/// Replace a destination's fields.
///
/// # Access Control
/// - `Admin` - Only admins can edit destinations
///
/// # Returns
/// - `200 OK` - The updated destination
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - No destination with that id
/// - `409 Conflict` - Slug already used by another destination
#[utoipa::path(
    put,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    request_body = DestinationInputDto,
    responses(
        (status = 200, description = "Updated destination", body = DestinationDto),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn update_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<DestinationInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let destination = DestinationService::new(&state.store)
        .update(id, DestinationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(destination.into_dto())))
}

/// Delete a destination.
///
/// Events, attractions and cabins pointing at it are left untouched.
///
/// # Access Control
/// - `Admin` - Only admins can delete destinations
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - No destination with that id
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    DestinationService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/destinations/{id}/events",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 200, description = "Events at the destination", body = Vec<EventDto>),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_destination_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = DestinationService::new(&state.store).events(id).await?;

    Ok(Json(events.into_iter().map(Event::into_dto).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/api/destinations/{id}/attractions",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 200, description = "Attractions at the destination", body = Vec<AttractionDto>),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_destination_attractions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let attractions = DestinationService::new(&state.store).attractions(id).await?;

    Ok(Json(
        attractions
            .into_iter()
            .map(Attraction::into_dto)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/destinations/{id}/cabins",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 200, description = "Cabins at the destination", body = Vec<CabinDto>),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_destination_cabins(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cabins = DestinationService::new(&state.store).cabins(id).await?;

    Ok(Json(cabins.into_iter().map(Cabin::into_dto).collect::<Vec<_>>()))
}
