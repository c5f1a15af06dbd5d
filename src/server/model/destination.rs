//! Destination domain model.
//!
//! A destination is a town or region of the Hill Country that groups events,
//! attractions and cabins by id.

use crate::model::destination::{DestinationDto, DestinationInputDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    /// URL-safe identifier, unique across destinations.
    pub slug: String,
    pub region: Option<String>,
    pub description: String,
    pub short_description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Travel-style tags used by the quiz and itinerary interest filter.
    pub tags: Vec<String>,
    pub featured: bool,
}

impl Destination {
    /// Builds the stored destination from creation parameters and an assigned id.
    pub fn from_params(id: i32, params: DestinationParams) -> Self {
        Self {
            id,
            name: params.name,
            slug: params.slug,
            region: params.region,
            description: params.description,
            short_description: params.short_description,
            image_url: params.image_url,
            latitude: params.latitude,
            longitude: params.longitude,
            tags: params.tags,
            featured: params.featured,
        }
    }

    /// Returns both coordinates when the destination has them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn into_dto(self) -> DestinationDto {
        DestinationDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            region: self.region,
            description: self.description,
            short_description: self.short_description,
            image_url: self.image_url,
            latitude: self.latitude,
            longitude: self.longitude,
            tags: self.tags,
            featured: self.featured,
        }
    }
}

/// Parameters for creating or replacing a destination.
///
/// `slug` is always populated; the service derives it from `name` when the request
/// leaves it blank.
#[derive(Debug, Clone)]
pub struct DestinationParams {
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub description: String,
    pub short_description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl DestinationParams {
    pub fn from_dto(dto: DestinationInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            slug: dto.slug.unwrap_or_default().trim().to_string(),
            region: dto.region,
            description: dto.description,
            short_description: dto.short_description,
            image_url: dto.image_url,
            latitude: dto.latitude,
            longitude: dto.longitude,
            tags: dto.tags,
            featured: dto.featured,
        }
    }
}
