use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config,
    data::mem::MemStorage,
    error::AppError,
    service::calendar::{cache::CalendarCache, CalendarService},
};

/// Every 15 minutes, on the minute.
const SYNC_SCHEDULE: &str = "0 */15 * * * *";

/// Starts the calendar sync scheduler
///
/// The job refreshes the Google Calendar cache so requests rarely wait on the
/// upstream API. It also runs once right away to warm the cache at startup.
///
/// # Arguments
/// - `store`: Storage, needed to build the calendar service
/// - `http_client`: Client used for the Google Calendar API
/// - `config`: Application configuration with the calendar credentials
/// - `cache`: Cache shared with the request handlers
pub async fn start_scheduler(
    store: MemStorage,
    http_client: reqwest::Client,
    config: Arc<Config>,
    cache: CalendarCache,
) -> Result<(), AppError> {
    if config.google_calendar.is_none() {
        tracing::info!("Google Calendar is not configured; calendar sync disabled");
        return Ok(());
    }

    sync_calendar(&store, &http_client, &config, &cache).await;

    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SYNC_SCHEDULE, move |_uuid, _lock| {
        let store = store.clone();
        let http_client = http_client.clone();
        let config = config.clone();
        let cache = cache.clone();

        Box::pin(async move {
            sync_calendar(&store, &http_client, &config, &cache).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Calendar sync scheduler started");

    Ok(())
}

async fn sync_calendar(
    store: &MemStorage,
    http_client: &reqwest::Client,
    config: &Config,
    cache: &CalendarCache,
) {
    match CalendarService::new(store, http_client, config, cache)
        .refresh()
        .await
    {
        Ok(Some(count)) => tracing::debug!("Cached {} Google Calendar events", count),
        Ok(None) => {}
        Err(e) => tracing::error!("Error syncing Google Calendar: {}", e),
    }
}
