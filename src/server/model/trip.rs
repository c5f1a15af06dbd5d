use chrono::NaiveDate;

use crate::{
    model::trip::{ItineraryDayDto, ItineraryDto, ItineraryRequestDto},
    server::model::{
        attraction::Attraction, cabin::Cabin, calendar::CalendarEvent, destination::Destination,
    },
};

/// Longest trip the planner will generate.
pub const MAX_TRIP_DAYS: u32 = 14;

#[derive(Debug, Clone)]
pub struct ItineraryParams {
    pub start_date: NaiveDate,
    pub days: u32,
    pub destination_ids: Vec<i32>,
    /// Lowercase interest tags.
    pub interests: Vec<String>,
}

impl ItineraryParams {
    pub fn from_dto(dto: ItineraryRequestDto) -> Self {
        Self {
            start_date: dto.start_date,
            days: dto.days,
            destination_ids: dto.destination_ids,
            interests: dto
                .interests
                .into_iter()
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: u32,
    pub date: NaiveDate,
    pub destination: Destination,
    pub attractions: Vec<Attraction>,
    pub events: Vec<CalendarEvent>,
    pub cabin: Option<Cabin>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    pub fn into_dto(self) -> ItineraryDto {
        ItineraryDto {
            start_date: self.start_date,
            end_date: self.end_date,
            days: self
                .days
                .into_iter()
                .map(|day| ItineraryDayDto {
                    day: day.day,
                    date: day.date,
                    destination: day.destination.into_dto(),
                    attractions: day
                        .attractions
                        .into_iter()
                        .map(Attraction::into_dto)
                        .collect(),
                    events: day.events.into_iter().map(CalendarEvent::into_dto).collect(),
                    cabin: day.cabin.map(Cabin::into_dto),
                })
                .collect(),
        }
    }
}
