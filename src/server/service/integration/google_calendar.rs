//! Read-only access to a public Google Calendar through an API key.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Deserialize;

use crate::server::{
    config::GoogleCalendarConfig,
    error::AppError,
    model::calendar::{CalendarEvent, EventSource},
    service::integration::ensure_success,
    util::time::local_midnight,
};

/// Largest page the events endpoint returns.
const PAGE_SIZE: &str = "250";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventList {
    #[serde(default)]
    items: Vec<GoogleEvent>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleEvent {
    id: String,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<EventTime>,
    end: Option<EventTime>,
    recurring_event_id: Option<String>,
}

/// Either `dateTime` for timed events or `date` for all-day events.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventTime {
    date_time: Option<DateTime<FixedOffset>>,
    date: Option<NaiveDate>,
}

impl EventTime {
    /// UTC instant plus whether the value was an all-day date.
    fn resolve(&self, offset: FixedOffset) -> Option<(DateTime<Utc>, bool)> {
        if let Some(date_time) = self.date_time {
            return Some((date_time.with_timezone(&Utc), false));
        }
        self.date.map(|date| (local_midnight(date, offset), true))
    }
}

pub struct GoogleCalendarClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a GoogleCalendarConfig,
    offset: FixedOffset,
}

impl<'a> GoogleCalendarClient<'a> {
    /// # Arguments
    /// - `offset` - Site offset used to place all-day events at local midnight
    pub fn new(
        http_client: &'a reqwest::Client,
        config: &'a GoogleCalendarConfig,
        offset: FixedOffset,
    ) -> Self {
        Self {
            http_client,
            config,
            offset,
        }
    }

    /// Fetches events starting in `[from, to)` with recurring events expanded.
    ///
    /// Follows `nextPageToken` until the last page. Items without a start time are
    /// skipped.
    ///
    /// # Returns
    /// - `Ok(Vec<CalendarEvent>)` - Events in the calendar's start-time order
    /// - `Err(AppError::ReqwestErr)` - Request failed or body didn't parse
    /// - `Err(AppError::Upstream)` - Google answered with a non-success status
    pub async fn list_events(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, AppError> {
        let calendar_id: String =
            url::form_urlencoded::byte_serialize(self.config.calendar_id.as_bytes()).collect();
        let url = format!("{}/calendars/{}/events", self.config.base_url, calendar_id);
        let time_min = from.to_rfc3339();
        let time_max = to.to_rfc3339();

        let mut events = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self.http_client.get(&url).query(&[
                ("key", self.config.api_key.as_str()),
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
                ("maxResults", PAGE_SIZE),
            ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let list = ensure_success("Google Calendar", request.send().await?)
                .await?
                .json::<EventList>()
                .await?;

            events.extend(list.items.into_iter().filter_map(|item| self.convert(item)));

            match list.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(events)
    }

    fn convert(&self, item: GoogleEvent) -> Option<CalendarEvent> {
        let (start_date, all_day) = item.start.as_ref()?.resolve(self.offset)?;
        let end_date = item
            .end
            .as_ref()
            .and_then(|end| end.resolve(self.offset))
            .map(|(end, _)| end)
            .filter(|end| *end >= start_date);

        Some(CalendarEvent {
            id: None,
            google_event_id: Some(item.id),
            source: EventSource::GoogleCalendar,
            title: item
                .summary
                .map(|summary| summary.trim().to_string())
                .unwrap_or_else(|| "Untitled event".to_string()),
            description: item.description.unwrap_or_default(),
            start_date,
            end_date,
            all_day,
            location: item.location,
            destination_id: None,
            category: None,
            image_url: None,
            is_recurring: item.recurring_event_id.is_some(),
            recurrence_pattern: None,
        })
    }
}
