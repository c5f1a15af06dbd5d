use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        calendar::{CalendarDayDto, CalendarEventDto},
    },
    server::{
        error::AppError,
        model::calendar::{CalendarDay, CalendarEvent},
        service::calendar::{CalendarQuery, CalendarService},
        state::AppState,
    },
};

/// Tag for grouping calendar endpoints in OpenAPI documentation
pub static CALENDAR_TAG: &str = "calendar";

/// Window of the merged calendar. Both bounds default relative to now.
#[derive(Deserialize)]
pub struct CalendarParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub destination_id: Option<i32>,
}

impl CalendarParams {
    fn into_query(self) -> Result<CalendarQuery, AppError> {
        CalendarQuery::new(self.from, self.to, self.destination_id, Utc::now())
    }
}

/// Local events merged with the community Google Calendar.
///
/// Google events sharing a title and site-local day with a local event are dropped.
/// Filtering by destination leaves Google events out since they carry no destination.
///
/// # Arguments
/// - `state` - Application state containing storage, HTTP client, config and cache
/// - `params` - Window `[from, to)`, defaulting to the next 90 days, and destination filter
///
/// # Returns
/// - `200 OK` - Events ordered by start date, then title
/// - `400 Bad Request` - `to` is not after `from`
#[utoipa::path(
    get,
    path = "/api/calendar",
    tag = CALENDAR_TAG,
    params(
        ("from" = Option<DateTime<Utc>>, Query, description = "Window start, inclusive (default: now)"),
        ("to" = Option<DateTime<Utc>>, Query, description = "Window end, exclusive (default: from + 90 days)"),
        ("destination_id" = Option<i32>, Query, description = "Only local events at this destination")
    ),
    responses(
        (status = 200, description = "Merged events", body = Vec<CalendarEventDto>),
        (status = 400, description = "Invalid window", body = ErrorDto)
    ),
)]
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query()?;

    let events = CalendarService::new(
        &state.store,
        &state.http_client,
        &state.config,
        &state.calendar_cache,
    )
    .events(query)
    .await;

    Ok(Json(
        events
            .into_iter()
            .map(CalendarEvent::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Merged events of one month grouped by site-local day.
///
/// # Returns
/// - `200 OK` - Days that have events, ascending
/// - `400 Bad Request` - Month outside 1 to 12
#[utoipa::path(
    get,
    path = "/api/calendar/month/{year}/{month}",
    tag = CALENDAR_TAG,
    params(
        ("year" = i32, Path, description = "Year"),
        ("month" = u32, Path, description = "Month, 1 to 12")
    ),
    responses(
        (status = 200, description = "Events grouped by day", body = Vec<CalendarDayDto>),
        (status = 400, description = "Invalid month", body = ErrorDto)
    ),
)]
pub async fn get_calendar_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let days = CalendarService::new(
        &state.store,
        &state.http_client,
        &state.config,
        &state.calendar_cache,
    )
    .month(year, month)
    .await?;

    Ok(Json(
        days.into_iter()
            .map(CalendarDay::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// The merged calendar as an iCalendar file for import into calendar apps.
///
/// # Returns
/// - `200 OK` - `text/calendar` attachment with one VEVENT per event
/// - `400 Bad Request` - `to` is not after `from`
#[utoipa::path(
    get,
    path = "/api/calendar/download.ics",
    tag = CALENDAR_TAG,
    params(
        ("from" = Option<DateTime<Utc>>, Query, description = "Window start, inclusive (default: now)"),
        ("to" = Option<DateTime<Utc>>, Query, description = "Window end, exclusive (default: from + 90 days)"),
        ("destination_id" = Option<i32>, Query, description = "Only local events at this destination")
    ),
    responses(
        (status = 200, description = "iCalendar document", body = String, content_type = "text/calendar"),
        (status = 400, description = "Invalid window", body = ErrorDto)
    ),
)]
pub async fn download_calendar(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query()?;

    let ics = CalendarService::new(
        &state.store,
        &state.http_client,
        &state.config,
        &state.calendar_cache,
    )
    .ics(query)
    .await;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"hill-country-events.ics\"",
            ),
        ],
        ics,
    ))
}
