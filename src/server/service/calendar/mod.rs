//! Public calendar: local events merged with the community Google Calendar.

pub mod cache;
pub mod ics;
pub mod merge;

use chrono::{DateTime, Duration, Utc};

use crate::server::{
    config::Config,
    data::{event::EventRepository, mem::MemStorage},
    error::AppError,
    model::{
        calendar::{CalendarDay, CalendarEvent},
        event::EventFilter,
    },
    service::integration::google_calendar::GoogleCalendarClient,
    util::time::month_range,
};

use self::{
    cache::{sync_window, CalendarCache},
    merge::{group_by_day, merge_events},
};

/// Days covered by a calendar query without an explicit `to`.
pub const DEFAULT_WINDOW_DAYS: i64 = 90;

/// A calendar window. `from` is inclusive and `to` exclusive.
#[derive(Debug, Clone, Copy)]
pub struct CalendarQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    /// Only events tied to this destination. Google events carry no destination and
    /// are left out when set.
    pub destination_id: Option<i32>,
}

impl CalendarQuery {
    /// Fills in the defaults: `from` = now, `to` = `from` + 90 days.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `to` is not after `from`
    pub fn new(
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        destination_id: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let from = from.unwrap_or(now);
        let to = to.unwrap_or(from + Duration::days(DEFAULT_WINDOW_DAYS));

        if to <= from {
            return Err(AppError::BadRequest(
                "'to' must be later than 'from'".to_string(),
            ));
        }

        Ok(Self {
            from,
            to,
            destination_id,
        })
    }
}

pub struct CalendarService<'a> {
    store: &'a MemStorage,
    http_client: &'a reqwest::Client,
    config: &'a Config,
    cache: &'a CalendarCache,
}

impl<'a> CalendarService<'a> {
    pub fn new(
        store: &'a MemStorage,
        http_client: &'a reqwest::Client,
        config: &'a Config,
        cache: &'a CalendarCache,
    ) -> Self {
        Self {
            store,
            http_client,
            config,
            cache,
        }
    }

    /// Merged events starting inside the query window.
    pub async fn events(&self, query: CalendarQuery) -> Vec<CalendarEvent> {
        let local: Vec<CalendarEvent> = EventRepository::new(self.store)
            .list(&EventFilter {
                destination_id: query.destination_id,
                from: Some(query.from),
                to: Some(query.to),
                category: None,
            })
            .await
            .into_iter()
            .map(CalendarEvent::from)
            .collect();

        let google = match query.destination_id {
            Some(_) => Vec::new(),
            None => self.google_events(query.from, query.to).await,
        };

        merge_events(self.config.site_offset, local, google)
    }

    /// Merged events of one site-local month grouped by day.
    ///
    /// # Returns
    /// - `Ok(Vec<CalendarDay>)` - Days with at least one event, ascending
    /// - `Err(AppError::BadRequest)` - Month outside `1..=12`
    pub async fn month(&self, year: i32, month: u32) -> Result<Vec<CalendarDay>, AppError> {
        let (from, to) = month_range(year, month, self.config.site_offset)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid month {}-{}", year, month)))?;

        let events = self
            .events(CalendarQuery {
                from,
                to,
                destination_id: None,
            })
            .await;

        Ok(group_by_day(self.config.site_offset, events))
    }

    /// The merged window rendered as an iCalendar document.
    pub async fn ics(&self, query: CalendarQuery) -> String {
        let events = self.events(query).await;
        ics::to_ics(self.config.site_offset, &events)
    }

    /// Google events starting in `[from, to)`, served from the cache when possible.
    ///
    /// Never fails: an unconfigured calendar or a failed fetch yields an empty list.
    pub async fn google_events(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<CalendarEvent> {
        let Some(google_config) = &self.config.google_calendar else {
            return Vec::new();
        };

        if let Some(events) = self.cache.get(from, to).await {
            return events;
        }

        let (sync_from, sync_to) = sync_window(Utc::now());
        let fits_sync_window = sync_from <= from && to <= sync_to;
        let (fetch_from, fetch_to) = if fits_sync_window {
            (sync_from, sync_to)
        } else {
            (from, to)
        };

        let client =
            GoogleCalendarClient::new(self.http_client, google_config, self.config.site_offset);
        match client.list_events(fetch_from, fetch_to).await {
            Ok(events) => {
                let in_window = events
                    .iter()
                    .filter(|event| event.start_date >= from && event.start_date < to)
                    .cloned()
                    .collect();
                if fits_sync_window {
                    self.cache.store(fetch_from, fetch_to, events).await;
                }
                in_window
            }
            Err(e) => {
                tracing::warn!("Google Calendar fetch failed, showing local events only: {}", e);
                Vec::new()
            }
        }
    }

    /// Refetches the sync window into the cache.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Number of events cached
    /// - `Ok(None)` - Google Calendar isn't configured
    /// - `Err(AppError)` - The fetch failed; the previous cache entry is kept
    pub async fn refresh(&self) -> Result<Option<usize>, AppError> {
        let Some(google_config) = &self.config.google_calendar else {
            return Ok(None);
        };

        let (from, to) = sync_window(Utc::now());
        let events =
            GoogleCalendarClient::new(self.http_client, google_config, self.config.site_offset)
                .list_events(from, to)
                .await?;
        let count = events.len();

        self.cache.store(from, to, events).await;

        Ok(Some(count))
    }
}
