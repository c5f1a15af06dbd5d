use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        trip::{ItineraryDto, ItineraryRequestDto},
    },
    server::{
        error::AppError, model::trip::ItineraryParams, service::trip::TripPlannerService,
        state::AppState,
    },
};

/// Tag for grouping trip planner endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip-planner";

/// Build a day-by-day itinerary.
///
/// Days rotate through the chosen destinations. Each day gets two attractions
/// (preferring the requested interests), the events on that date and a cabin.
/// The same request against the same content always yields the same plan.
///
/// # Arguments
/// - `state` - Application state containing storage, HTTP client, config and cache
/// - `payload` - Start date, trip length and optional destinations and interests
///
/// # Returns
/// - `200 OK` - The itinerary
/// - `400 Bad Request` - Trip length outside 1 to 14 days, or no destinations exist
/// - `404 Not Found` - A requested destination does not exist
#[utoipa::path(
    post,
    path = "/api/trip-planner/itinerary",
    tag = TRIP_TAG,
    request_body = ItineraryRequestDto,
    responses(
        (status = 200, description = "Generated itinerary", body = ItineraryDto),
        (status = 400, description = "Invalid itinerary request", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn create_itinerary(
    State(state): State<AppState>,
    Json(payload): Json<ItineraryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let itinerary = TripPlannerService::new(
        &state.store,
        &state.http_client,
        &state.config,
        &state.calendar_cache,
    )
    .itinerary(ItineraryParams::from_dto(payload))
    .await?;

    Ok((StatusCode::OK, Json(itinerary.into_dto())))
}
