//! Day-by-day itinerary generation.

use chrono::{FixedOffset, NaiveDate};

use crate::server::{
    config::Config,
    data::{
        attraction::AttractionRepository, cabin::CabinRepository,
        destination::DestinationRepository, mem::MemStorage,
    },
    error::AppError,
    model::{
        attraction::Attraction,
        cabin::{Cabin, CabinFilter},
        calendar::CalendarEvent,
        destination::Destination,
        trip::{Itinerary, ItineraryDay, ItineraryParams, MAX_TRIP_DAYS},
    },
    service::calendar::{
        cache::CalendarCache, merge::is_duplicate, CalendarQuery, CalendarService,
    },
    util::time::{add_days, local_day, local_midnight},
};

/// Attractions suggested per day.
const ATTRACTIONS_PER_DAY: usize = 2;

pub struct TripPlannerService<'a> {
    store: &'a MemStorage,
    http_client: &'a reqwest::Client,
    config: &'a Config,
    cache: &'a CalendarCache,
}

impl<'a> TripPlannerService<'a> {
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

    /// Builds an itinerary rotating through the chosen destinations
    ///
    /// Equal parameters over equal storage always produce the same itinerary.
    ///
    /// # Returns
    /// - `Ok(Itinerary)` - One entry per day
    /// - `Err(AppError::BadRequest)` - `days` outside `1..=14` or no destinations at all
    /// - `Err(AppError::NotFound)` - A requested destination id doesn't exist
    pub async fn itinerary(&self, params: ItineraryParams) -> Result<Itinerary, AppError> {
        if params.days == 0 || params.days > MAX_TRIP_DAYS {
            return Err(AppError::BadRequest(format!(
                "Trip length must be between 1 and {} days",
                MAX_TRIP_DAYS
            )));
        }

        let destinations = self.destinations(&params.destination_ids).await?;
        if destinations.is_empty() {
            return Err(AppError::BadRequest(
                "No destinations available to plan a trip".to_string(),
            ));
        }

        let offset = self.config.site_offset;
        let end_date = add_days(params.start_date, u64::from(params.days - 1));
        let events = CalendarService::new(self.store, self.http_client, self.config, self.cache)
            .events(CalendarQuery {
                from: local_midnight(params.start_date, offset),
                to: local_midnight(add_days(end_date, 1), offset),
                destination_id: None,
            })
            .await;

        let attraction_repo = AttractionRepository::new(self.store);
        let cabin_repo = CabinRepository::new(self.store);
        let all_cabins = cabin_repo.list(&CabinFilter::default()).await;

        let count = destinations.len();
        let mut days = Vec::with_capacity(params.days as usize);
        for index in 0..params.days as usize {
            let destination = &destinations[index % count];
            let visit = index / count;
            let date = add_days(params.start_date, index as u64);

            let attractions = attraction_repo.by_destination(destination.id).await;
            let cabins = cabin_repo.by_destination(destination.id).await;

            days.push(ItineraryDay {
                day: index as u32 + 1,
                date,
                destination: destination.clone(),
                attractions: pick_attractions(&attractions, &params.interests, visit),
                events: events_on(&events, date, destination.id, offset),
                cabin: pick_cabin(&cabins, &all_cabins, visit, index),
            });
        }

        Ok(Itinerary {
            start_date: params.start_date,
            end_date,
            days,
        })
    }

    /// Requested destinations in request order, or all of them ordered by id.
    async fn destinations(&self, ids: &[i32]) -> Result<Vec<Destination>, AppError> {
        let repo = DestinationRepository::new(self.store);
        if ids.is_empty() {
            return Ok(repo.list().await);
        }

        let mut destinations = Vec::with_capacity(ids.len());
        for &id in ids {
            let destination = repo.get(id).await.ok_or_else(|| {
                AppError::NotFound(format!("Destination with id {} not found", id))
            })?;
            destinations.push(destination);
        }

        Ok(destinations)
    }
}

/// Takes up to two attractions starting at `(visit * 2) % len`, wrapping around.
///
/// When interests are given and at least one attraction shares a tag with them, only
/// those attractions are considered.
fn pick_attractions(attractions: &[Attraction], interests: &[String], visit: usize) -> Vec<Attraction> {
    let matching: Vec<&Attraction> = if interests.is_empty() {
        Vec::new()
    } else {
        attractions
            .iter()
            .filter(|attraction| attraction.shares_tag_with(interests))
            .collect()
    };
    let pool: Vec<&Attraction> = if matching.is_empty() {
        attractions.iter().collect()
    } else {
        matching
    };

    if pool.is_empty() {
        return Vec::new();
    }

    let start = (visit * ATTRACTIONS_PER_DAY) % pool.len();
    (0..ATTRACTIONS_PER_DAY.min(pool.len()))
        .map(|offset| pool[(start + offset) % pool.len()].clone())
        .collect()
}

fn pick_cabin(cabins: &[Cabin], all_cabins: &[Cabin], visit: usize, index: usize) -> Option<Cabin> {
    if !cabins.is_empty() {
        return Some(cabins[visit % cabins.len()].clone());
    }
    if all_cabins.is_empty() {
        return None;
    }
    Some(all_cabins[index % all_cabins.len()].clone())
}

/// Events starting on `date` in site time, tied to the destination or to none.
///
/// Duplicates collapse to the first occurrence.
fn events_on(
    events: &[CalendarEvent],
    date: NaiveDate,
    destination_id: i32,
    offset: FixedOffset,
) -> Vec<CalendarEvent> {
    let mut kept: Vec<CalendarEvent> = Vec::new();
    for event in events
        .iter()
        .filter(|event| local_day(event.start_date, offset) == date)
        .filter(|event| event.destination_id.is_none_or(|id| id == destination_id))
    {
        if !kept.iter().any(|other| is_duplicate(other, event, offset)) {
            kept.push(event.clone());
        }
    }
    kept
}
