use crate::model::weather::WeatherDto;

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub destination_id: i32,
    pub location: String,
    pub temperature: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub conditions: String,
    pub icon: Option<String>,
    pub wind_speed: Option<f64>,
    pub fallback: bool,
}

impl WeatherReport {
    pub fn into_dto(self) -> WeatherDto {
        WeatherDto {
            destination_id: self.destination_id,
            location: self.location,
            temperature: self.temperature,
            feels_like: self.feels_like,
            humidity: self.humidity,
            conditions: self.conditions,
            icon: self.icon,
            wind_speed: self.wind_speed,
            fallback: self.fallback,
        }
    }
}
