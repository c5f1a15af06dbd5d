use crate::model::cabin::{CabinDto, CabinInputDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Cabin {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub destination_id: i32,
    /// Nightly rate in cents.
    pub price_per_night: i64,
    pub bedrooms: u8,
    pub max_guests: u8,
    pub amenities: Vec<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub booking_url: Option<String>,
    /// Guest rating in `0.0..=5.0`.
    pub rating: Option<f32>,
    pub featured: bool,
}

impl Cabin {
    pub fn from_params(id: i32, params: CabinParams) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            destination_id: params.destination_id,
            price_per_night: params.price_per_night,
            bedrooms: params.bedrooms,
            max_guests: params.max_guests,
            amenities: params.amenities,
            tags: params.tags,
            image_url: params.image_url,
            booking_url: params.booking_url,
            rating: params.rating,
            featured: params.featured,
        }
    }

    pub fn into_dto(self) -> CabinDto {
        CabinDto {
            id: self.id,
            name: self.name,
            description: self.description,
            destination_id: self.destination_id,
            price_per_night: self.price_per_night,
            bedrooms: self.bedrooms,
            max_guests: self.max_guests,
            amenities: self.amenities,
            tags: self.tags,
            image_url: self.image_url,
            booking_url: self.booking_url,
            rating: self.rating,
            featured: self.featured,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CabinParams {
    pub name: String,
    pub description: String,
    pub destination_id: i32,
    pub price_per_night: i64,
    pub bedrooms: u8,
    pub max_guests: u8,
    pub amenities: Vec<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub booking_url: Option<String>,
    pub rating: Option<f32>,
    pub featured: bool,
}

impl CabinParams {
    pub fn from_dto(dto: CabinInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            destination_id: dto.destination_id,
            price_per_night: dto.price_per_night,
            bedrooms: dto.bedrooms,
            max_guests: dto.max_guests,
            amenities: dto.amenities,
            tags: dto.tags,
            image_url: dto.image_url,
            booking_url: dto.booking_url,
            rating: dto.rating,
            featured: dto.featured,
        }
    }
}

/// Filters for listing cabins.
#[derive(Debug, Clone, Default)]
pub struct CabinFilter {
    pub destination_id: Option<i32>,
    pub min_guests: Option<u8>,
    /// Inclusive ceiling on the nightly rate, in cents.
    pub max_price: Option<i64>,
}

impl CabinFilter {
    pub fn matches(&self, cabin: &Cabin) -> bool {
        self.destination_id.is_none_or(|id| cabin.destination_id == id)
            && self.min_guests.is_none_or(|guests| cabin.max_guests >= guests)
            && self.max_price.is_none_or(|price| cabin.price_per_night <= price)
    }
}
