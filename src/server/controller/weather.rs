use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, weather::WeatherDto},
    server::{error::AppError, service::weather::WeatherService, state::AppState},
};

/// Tag for grouping weather endpoints in OpenAPI documentation
pub static WEATHER_TAG: &str = "weather";

/// Current conditions at a destination.
///
/// Falls back to typical conditions for the month, with `fallback` set, when the
/// destination has no coordinates or the weather service is unavailable.
///
/// # Returns
/// - `200 OK` - Weather report
/// - `404 Not Found` - No destination with that id
#[utoipa::path(
    get,
    path = "/api/weather/{destination_id}",
    tag = WEATHER_TAG,
    params(
        ("destination_id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 200, description = "Weather report", body = WeatherDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Path(destination_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let report = WeatherService::new(&state.store, &state.http_client, &state.config)
        .current(destination_id)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
