use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    attraction::AttractionDto, cabin::CabinDto, calendar::CalendarEventDto,
    destination::DestinationDto,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItineraryRequestDto {
    pub start_date: NaiveDate,
    pub days: u32,
    /// Destinations to rotate through, in visiting order. All destinations when empty.
    #[serde(default)]
    pub destination_ids: Vec<i32>,
    /// Interest tags used to prefer matching attractions.
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDayDto {
    /// 1-based day number.
    pub day: u32,
    pub date: NaiveDate,
    pub destination: DestinationDto,
    pub attractions: Vec<AttractionDto>,
    pub events: Vec<CalendarEventDto>,
    pub cabin: Option<CabinDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<ItineraryDayDto>,
}
