use mockito::Matcher;

use crate::server::{
    config::{Config, WeatherConfig},
    service::weather::WeatherService,
};

use super::*;

mod current;

fn weather_config(base_url: String) -> Config {
    let mut config = Config::test();
    config.weather = Some(WeatherConfig {
        api_key: "owm-key".to_string(),
        base_url,
    });
    config
}
