use chrono::{Duration, NaiveDate, SecondsFormat};
use mockito::Matcher;

use crate::server::{
    config::{Config, GoogleCalendarConfig},
    model::calendar::EventSource,
    service::calendar::{cache::CalendarCache, CalendarQuery, CalendarService},
};

use super::*;

mod month;

fn google_config(base_url: String) -> Config {
    let mut config = Config::test();
    config.google_calendar = Some(GoogleCalendarConfig {
        api_key: "google-key".to_string(),
        calendar_id: "hill-country".to_string(),
        base_url,
    });
    config
}

/// Google event list body with timed events as (id, title, start).
fn google_body(events: &[(&str, &str, DateTime<Utc>)]) -> String {
    let items: Vec<String> = events
        .iter()
        .map(|(id, title, start)| {
            format!(
                r#"{{"id":"{}","summary":"{}","start":{{"dateTime":"{}"}}}}"#,
                id,
                title,
                start.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            )
        })
        .collect();
    format!(r#"{{"items":[{}]}}"#, items.join(","))
}
