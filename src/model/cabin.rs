use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CabinDto {
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
    pub rating: Option<f32>,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CabinInputDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub destination_id: i32,
    pub price_per_night: i64,
    pub bedrooms: u8,
    pub max_guests: u8,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub booking_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub featured: bool,
}
