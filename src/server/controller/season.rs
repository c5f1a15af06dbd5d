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
        season::{SeasonDto, SeasonalActivityDto, SeasonalActivityInputDto, UpdateSeasonDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::season::{Season, SeasonalActivityParams, UpdateSeasonParams},
        service::season::SeasonService,
        state::AppState,
    },
};

/// Tag for grouping season endpoints in OpenAPI documentation
pub static SEASON_TAG: &str = "season";

/// List all seasons with their activities, in display order.
///
/// # Returns
/// - `200 OK` - Seasons
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/seasons",
    tag = SEASON_TAG,
    responses(
        (status = 200, description = "All seasons", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let seasons = SeasonService::new(&state.db).list().await?;

    Ok(Json(
        seasons.into_iter().map(Season::into_dto).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/seasons/{slug}",
    tag = SEASON_TAG,
    params(
        ("slug" = String, Path, description = "Season slug, e.g. spring")
    ),
    responses(
        (status = 200, description = "Season", body = SeasonDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Update a season's text, months and image.
///
/// # Access Control
/// - `Admin` - Only admins can edit seasons
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Season id
/// - `payload` - New season content
///
/// # Returns
/// - `200 OK` - The updated season with its activities
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - No season with that id
#[utoipa::path(
    put,
    path = "/api/seasons/id/{id}",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Season id")
    ),
    request_body = UpdateSeasonDto,
    responses(
        (status = 200, description = "Updated season", body = SeasonDto),
        (status = 400, description = "Invalid season data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_season(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let season = SeasonService::new(&state.db)
        .update(UpdateSeasonParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Add an activity to a season.
///
/// # Access Control
/// - `Admin` - Only admins can edit seasons
///
/// # Returns
/// - `201 Created` - The stored activity
/// - `400 Bad Request` - Blank title
/// - `404 Not Found` - No season with that id
#[utoipa::path(
    post,
    path = "/api/seasons/id/{id}/activities",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Season id")
    ),
    request_body = SeasonalActivityInputDto,
    responses(
        (status = 201, description = "Created activity", body = SeasonalActivityDto),
        (status = 400, description = "Invalid activity data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    session: Session,
    Path(season_id): Path<i32>,
    Json(payload): Json<SeasonalActivityInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let activity = SeasonService::new(&state.db)
        .create_activity(season_id, SeasonalActivityParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(activity.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/seasons/activities/{id}",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Activity id")
    ),
    request_body = SeasonalActivityInputDto,
    responses(
        (status = 200, description = "Updated activity", body = SeasonalActivityDto),
        (status = 400, description = "Invalid activity data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SeasonalActivityInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let activity = SeasonService::new(&state.db)
        .update_activity(id, SeasonalActivityParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/seasons/activities/{id}",
    tag = SEASON_TAG,
    params(
        ("id" = i32, Path, description = "Activity id")
    ),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    SeasonService::new(&state.db).delete_activity(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
