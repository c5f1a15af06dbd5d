use serde::Deserialize;

use crate::server::{
    config::WeatherConfig, error::AppError, service::integration::ensure_success,
};

#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub name: Option<String>,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Option<Wind>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

/// OpenWeatherMap current conditions client.
pub struct WeatherClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a WeatherConfig,
}

impl<'a> WeatherClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a WeatherConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetches current conditions in imperial units for a coordinate pair.
    pub async fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather, AppError> {
        let response = self
            .http_client
            .get(format!("{}/weather", self.config.base_url))
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", "imperial".to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()
            .await?;

        Ok(ensure_success("OpenWeatherMap", response)
            .await?
            .json::<CurrentWeather>()
            .await?)
    }
}
