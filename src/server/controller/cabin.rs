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
        cabin::{CabinDto, CabinInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::cabin::{Cabin, CabinFilter, CabinParams},
        service::cabin::CabinService,
        state::AppState,
    },
};

/// Tag for grouping cabin endpoints in OpenAPI documentation
pub static CABIN_TAG: &str = "cabin";

#[derive(Deserialize)]
pub struct CabinQuery {
    pub destination_id: Option<i32>,
    pub min_guests: Option<u8>,
    /// Nightly rate ceiling in cents.
    pub max_price: Option<i64>,
}

/// List cabins ordered by id.
///
/// # Arguments
/// - `state` - Application state containing the in-memory storage
/// - `query` - Destination, minimum capacity and price ceiling filters
///
/// # Returns
/// - `200 OK` - Matching cabins
#[utoipa::path(
    get,
    path = "/api/cabins",
    tag = CABIN_TAG,
    params(
        ("destination_id" = Option<i32>, Query, description = "Only cabins at this destination"),
        ("min_guests" = Option<u8>, Query, description = "Cabins sleeping at least this many guests"),
        ("max_price" = Option<i64>, Query, description = "Highest nightly rate in cents")
    ),
    responses(
        (status = 200, description = "Matching cabins", body = Vec<CabinDto>)
    ),
)]
pub async fn get_cabins(
    State(state): State<AppState>,
    Query(query): Query<CabinQuery>,
) -> impl IntoResponse {
    let filter = CabinFilter {
        destination_id: query.destination_id,
        min_guests: query.min_guests,
        max_price: query.max_price,
    };

    let cabins = CabinService::new(&state.store).list(&filter).await;

    Json(cabins.into_iter().map(Cabin::into_dto).collect::<Vec<_>>())
}

/// Create a cabin listing.
///
/// # Access Control
/// - `Admin` - Only admins can create cabins
///
/// # Returns
/// - `201 Created` - The stored cabin
/// - `400 Bad Request` - Blank name, negative price, rating outside 0 to 5 or unknown destination
#[utoipa::path(
    post,
    path = "/api/cabins",
    tag = CABIN_TAG,
    request_body = CabinInputDto,
    responses(
        (status = 201, description = "Created cabin", body = CabinDto),
        (status = 400, description = "Invalid cabin data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_cabin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CabinInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let cabin = CabinService::new(&state.store)
        .create(CabinParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(cabin.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/cabins/{id}",
    tag = CABIN_TAG,
    params(
        ("id" = i32, Path, description = "Cabin id")
    ),
    responses(
        (status = 200, description = "Cabin", body = CabinDto),
        (status = 404, description = "Cabin not found", body = ErrorDto)
    ),
)]
pub async fn get_cabin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cabin = CabinService::new(&state.store).get(id).await?;

    Ok((StatusCode::OK, Json(cabin.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/cabins/{id}",
    tag = CABIN_TAG,
    params(
        ("id" = i32, Path, description = "Cabin id")
    ),
    request_body = CabinInputDto,
    responses(
        (status = 200, description = "Updated cabin", body = CabinDto),
        (status = 400, description = "Invalid cabin data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Cabin not found", body = ErrorDto)
    ),
)]
pub async fn update_cabin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CabinInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let cabin = CabinService::new(&state.store)
        .update(id, CabinParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(cabin.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/cabins/{id}",
    tag = CABIN_TAG,
    params(
        ("id" = i32, Path, description = "Cabin id")
    ),
    responses(
        (status = 204, description = "Cabin deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Cabin not found", body = ErrorDto)
    ),
)]
pub async fn delete_cabin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    CabinService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
