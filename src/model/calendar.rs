use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventSourceDto {
    Local,
    GoogleCalendar,
}

/// An event as shown on the public calendar, either from local storage or Google Calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalendarEventDto {
    /// Local event id; absent for Google Calendar events.
    pub id: Option<i32>,
    pub google_event_id: Option<String>,
    pub source: EventSourceDto,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub location: Option<String>,
    pub destination_id: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalendarDayDto {
    /// Calendar day in the site's time zone.
    pub date: NaiveDate,
    pub events: Vec<CalendarEventDto>,
}
