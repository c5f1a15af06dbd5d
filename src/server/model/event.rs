//! Locally stored calendar events.

use chrono::{DateTime, Utc};

use crate::model::event::{EventDto, EventInputDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    /// Never earlier than `start_date` when present.
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub destination_id: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_recurring: bool,
    /// Free-form recurrence hint such as "weekly" or "first Saturday".
    pub recurrence_pattern: Option<String>,
    pub featured: bool,
}

impl Event {
    pub fn from_params(id: i32, params: EventParams) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
            start_date: params.start_date,
            end_date: params.end_date,
            location: params.location,
            destination_id: params.destination_id,
            category: params.category,
            image_url: params.image_url,
            is_recurring: params.is_recurring,
            recurrence_pattern: params.recurrence_pattern,
            featured: params.featured,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            destination_id: self.destination_id,
            category: self.category,
            image_url: self.image_url,
            is_recurring: self.is_recurring,
            recurrence_pattern: self.recurrence_pattern,
            featured: self.featured,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventParams {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub destination_id: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub featured: bool,
}

impl EventParams {
    pub fn from_dto(dto: EventInputDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            location: dto.location,
            destination_id: dto.destination_id,
            category: dto.category,
            image_url: dto.image_url,
            is_recurring: dto.is_recurring,
            recurrence_pattern: dto.recurrence_pattern,
            featured: dto.featured,
        }
    }
}

/// Filters for listing events. All present filters must match.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub destination_id: Option<i32>,
    /// Inclusive lower bound on `start_date`.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `start_date`.
    pub to: Option<DateTime<Utc>>,
    /// Case-insensitive category match.
    pub category: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(destination_id) = self.destination_id {
            if event.destination_id != Some(destination_id) {
                return false;
            }
        }
        if let Some(from) = self.from {
            if event.start_date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if event.start_date >= to {
                return false;
            }
        }
        if let Some(category) = &self.category {
            let matches_category = event
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category));
            if !matches_category {
                return false;
            }
        }
        true
    }
}
