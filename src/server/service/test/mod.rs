use chrono::{DateTime, TimeZone, Utc};

use crate::server::{
    data::mem::MemStorage,
    error::AppError,
    model::{
        attraction::{Attraction, AttractionParams},
        cabin::{Cabin, CabinParams},
        destination::{Destination, DestinationParams},
        event::{Event, EventParams},
    },
    service::{
        attraction::AttractionService, cabin::CabinService, destination::DestinationService,
        event::EventService,
    },
};

mod auth;
mod calendar;
mod chat;
mod content;
mod season;
mod trip;
mod upload;
mod weather;

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

fn destination_params(name: &str, tags: &[&str]) -> DestinationParams {
    DestinationParams {
        name: name.to_string(),
        slug: String::new(),
        region: None,
        description: format!("About {}", name),
        short_description: None,
        image_url: None,
        latitude: None,
        longitude: None,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        featured: false,
    }
}

fn attraction_params(destination_id: i32, name: &str, tags: &[&str]) -> AttractionParams {
    AttractionParams {
        name: name.to_string(),
        description: String::new(),
        destination_id,
        category: None,
        address: None,
        website: None,
        image_url: None,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        featured: false,
    }
}

fn cabin_params(destination_id: i32, name: &str) -> CabinParams {
    CabinParams {
        name: name.to_string(),
        description: String::new(),
        destination_id,
        price_per_night: 18_500,
        bedrooms: 2,
        max_guests: 4,
        amenities: Vec::new(),
        tags: Vec::new(),
        image_url: None,
        booking_url: None,
        rating: Some(4.5),
        featured: false,
    }
}

fn event_params(title: &str, start_date: DateTime<Utc>, destination_id: Option<i32>) -> EventParams {
    EventParams {
        title: title.to_string(),
        description: String::new(),
        start_date,
        end_date: None,
        location: None,
        destination_id,
        category: None,
        image_url: None,
        is_recurring: false,
        recurrence_pattern: None,
        featured: false,
    }
}

async fn create_destination(
    store: &MemStorage,
    name: &str,
    tags: &[&str],
) -> Result<Destination, AppError> {
    DestinationService::new(store)
        .create(destination_params(name, tags))
        .await
}

async fn create_attraction(
    store: &MemStorage,
    destination_id: i32,
    name: &str,
    tags: &[&str],
) -> Result<Attraction, AppError> {
    AttractionService::new(store)
        .create(attraction_params(destination_id, name, tags))
        .await
}

async fn create_cabin(store: &MemStorage, destination_id: i32, name: &str) -> Result<Cabin, AppError> {
    CabinService::new(store)
        .create(cabin_params(destination_id, name))
        .await
}

async fn create_event(
    store: &MemStorage,
    title: &str,
    start_date: DateTime<Utc>,
    destination_id: Option<i32>,
) -> Result<Event, AppError> {
    EventService::new(store)
        .create(event_params(title, start_date, destination_id))
        .await
}
