//! Calendar view of events from every source.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::calendar::{CalendarDayDto, CalendarEventDto, EventSourceDto},
    server::model::event::Event,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    Local,
    GoogleCalendar,
}

impl EventSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::GoogleCalendar => "google",
        }
    }

    pub fn into_dto(self) -> EventSourceDto {
        match self {
            Self::Local => EventSourceDto::Local,
            Self::GoogleCalendar => EventSourceDto::GoogleCalendar,
        }
    }
}

/// An event on the merged public calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Local storage id; `None` for Google Calendar events.
    pub id: Option<i32>,
    pub google_event_id: Option<String>,
    pub source: EventSource,
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

impl CalendarEvent {
    /// Identifier stable across requests, used for iCalendar UIDs.
    pub fn uid(&self) -> String {
        let id = match (&self.id, &self.google_event_id) {
            (Some(id), _) => id.to_string(),
            (None, Some(google_id)) => google_id.clone(),
            (None, None) => format!("{}-{}", self.start_date.timestamp(), self.title),
        };
        format!("event-{}-{}@hillcountryguide", self.source.as_str(), id)
    }

    pub fn into_dto(self) -> CalendarEventDto {
        CalendarEventDto {
            id: self.id,
            google_event_id: self.google_event_id,
            source: self.source.into_dto(),
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            all_day: self.all_day,
            location: self.location,
            destination_id: self.destination_id,
            category: self.category,
            image_url: self.image_url,
            is_recurring: self.is_recurring,
            recurrence_pattern: self.recurrence_pattern,
        }
    }
}

impl From<Event> for CalendarEvent {
    fn from(event: Event) -> Self {
        Self {
            id: Some(event.id),
            google_event_id: None,
            source: EventSource::Local,
            title: event.title,
            description: event.description,
            start_date: event.start_date,
            end_date: event.end_date,
            all_day: false,
            location: event.location,
            destination_id: event.destination_id,
            category: event.category,
            image_url: event.image_url,
            is_recurring: event.is_recurring,
            recurrence_pattern: event.recurrence_pattern,
        }
    }
}

/// Events starting on one site-local day.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

impl CalendarDay {
    pub fn into_dto(self) -> CalendarDayDto {
        CalendarDayDto {
            date: self.date,
            events: self
                .events
                .into_iter()
                .map(CalendarEvent::into_dto)
                .collect(),
        }
    }
}
