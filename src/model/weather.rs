use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherDto {
    pub destination_id: i32,
    pub location: String,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub conditions: String,
    pub icon: Option<String>,
    /// Miles per hour.
    pub wind_speed: Option<f64>,
    /// True when the values are canned seasonal averages.
    pub fallback: bool,
}
