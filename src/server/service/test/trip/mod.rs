use chrono::NaiveDate;

use crate::server::{
    config::Config,
    model::trip::{Itinerary, ItineraryParams},
    service::{calendar::cache::CalendarCache, trip::TripPlannerService},
};

use super::*;

mod itinerary;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn params(days: u32, destination_ids: Vec<i32>, interests: &[&str]) -> ItineraryParams {
    ItineraryParams {
        start_date: date(2026, 5, 1),
        days,
        destination_ids,
        interests: interests.iter().map(|tag| tag.to_string()).collect(),
    }
}

async fn plan(store: &MemStorage, params: ItineraryParams) -> Result<Itinerary, AppError> {
    let http_client = reqwest::Client::new();
    let config = Config::test();
    let cache = CalendarCache::new();

    TripPlannerService::new(store, &http_client, &config, &cache)
        .itinerary(params)
        .await
}
