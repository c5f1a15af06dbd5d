use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        attraction::{AttractionDto, AttractionInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::attraction::{Attraction, AttractionParams},
        service::attraction::AttractionService,
        state::AppState,
    },
};

/// Tag for grouping attraction endpoints in OpenAPI documentation
pub static ATTRACTION_TAG: &str = "attraction";

#[derive(Deserialize)]
pub struct AttractionQuery {
    pub destination_id: Option<i32>,
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/attractions",
    tag = ATTRACTION_TAG,
    params(
        ("destination_id" = Option<i32>, Query, description = "Only attractions at this destination"),
        ("category" = Option<String>, Query, description = "Category, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching attractions", body = Vec<AttractionDto>)
    ),
)]
pub async fn get_attractions(
    State(state): State<AppState>,
    Query(query): Query<AttractionQuery>,
) -> impl IntoResponse {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|category| !category.is_empty());

    let attractions = AttractionService::new(&state.store)
        .list(query.destination_id, category)
        .await;

    Json(
        attractions
            .into_iter()
            .map(Attraction::into_dto)
            .collect::<Vec<_>>(),
    )
}

/// Create an attraction.
///
/// # Access Control
/// - `Admin` - Only admins can create attractions
///
/// # Returns
/// - `201 Created` - The stored attraction
/// - `400 Bad Request` - Blank name or unknown destination
#[utoipa::path(
    post,
    path = "/api/attractions",
    tag = ATTRACTION_TAG,
    request_body = AttractionInputDto,
    responses(
        (status = 201, description = "Created attraction", body = AttractionDto),
        (status = 400, description = "Invalid attraction data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_attraction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AttractionInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let attraction = AttractionService::new(&state.store)
        .create(AttractionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(attraction.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/attractions/{id}",
    tag = ATTRACTION_TAG,
    params(
        ("id" = i32, Path, description = "Attraction id")
    ),
    responses(
        (status = 200, description = "Attraction", body = AttractionDto),
        (status = 404, description = "Attraction not found", body = ErrorDto)
    ),
)]
pub async fn get_attraction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let attraction = AttractionService::new(&state.store).get(id).await?;

    Ok((StatusCode::OK, Json(attraction.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/attractions/{id}",
    tag = ATTRACTION_TAG,
    params(
        ("id" = i32, Path, description = "Attraction id")
    ),
    request_body = AttractionInputDto,
    responses(
        (status = 200, description = "Updated attraction", body = AttractionDto),
        (status = 400, description = "Invalid attraction data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Attraction not found", body = ErrorDto)
    ),
)]
pub async fn update_attraction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AttractionInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let attraction = AttractionService::new(&state.store)
        .update(id, AttractionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(attraction.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/attractions/{id}",
    tag = ATTRACTION_TAG,
    params(
        ("id" = i32, Path, description = "Attraction id")
    ),
    responses(
        (status = 204, description = "Attraction deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Attraction not found", body = ErrorDto)
    ),
)]
pub async fn delete_attraction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    AttractionService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
