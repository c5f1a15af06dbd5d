//! In-memory cache of the last Google Calendar fetch.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::server::model::calendar::CalendarEvent;

/// How long a fetch is served before it is considered stale.
pub const CALENDAR_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Window the background sync keeps warm: 30 days back, one year ahead.
pub fn sync_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - ChronoDuration::days(30), now + ChronoDuration::days(365))
}

struct CachedEvents {
    fetched_at: Instant,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    events: Vec<CalendarEvent>,
}

/// Shared cache of Google Calendar events for one time window.
///
/// Cloning shares the underlying entry.
#[derive(Clone, Default)]
pub struct CalendarCache {
    entry: Arc<RwLock<Option<CachedEvents>>>,
}

impl CalendarCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns cached events starting in `[from, to)` when the cache is fresh and
    /// its window covers the request.
    pub async fn get(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Option<Vec<CalendarEvent>> {
        self.get_at(from, to, Instant::now()).await
    }

    async fn get_at(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        now: Instant,
    ) -> Option<Vec<CalendarEvent>> {
        let entry = self.entry.read().await;
        let cached = entry.as_ref()?;

        let fresh = now.saturating_duration_since(cached.fetched_at) < CALENDAR_CACHE_TTL;
        let covers = cached.from <= from && to <= cached.to;
        if !fresh || !covers {
            return None;
        }

        Some(
            cached
                .events
                .iter()
                .filter(|event| event.start_date >= from && event.start_date < to)
                .cloned()
                .collect(),
        )
    }

    /// Replaces the cache with events fetched for `[from, to)`.
    pub async fn store(&self, from: DateTime<Utc>, to: DateTime<Utc>, events: Vec<CalendarEvent>) {
        *self.entry.write().await = Some(CachedEvents {
            fetched_at: Instant::now(),
            from,
            to,
            events,
        });
    }
}
