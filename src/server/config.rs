use chrono::FixedOffset;
use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_CALENDAR_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";
const SENDGRID_BASE_URL: &str = "https://api.sendgrid.com/v3";
const CLOUDINARY_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
const WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Google Calendar read access through an API key on a public calendar.
#[derive(Clone, Debug)]
pub struct GoogleCalendarConfig {
    pub api_key: String,
    pub calendar_id: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct SendGridConfig {
    pub api_key: String,
    pub from_email: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,

    pub admin_username: String,
    pub admin_password: String,
    pub session_secure: bool,

    /// Offset of the site's wall clock from UTC, used to decide calendar days.
    pub site_offset: FixedOffset,
    pub upload_dir: PathBuf,
    pub cors_origin: Option<String>,

    pub google_calendar: Option<GoogleCalendarConfig>,
    pub openai: Option<OpenAiConfig>,
    pub sendgrid: Option<SendGridConfig>,
    pub cloudinary: Option<CloudinaryConfig>,
    pub weather: Option<WeatherConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let site_offset = site_offset(parse_or("SITE_UTC_OFFSET_HOURS", -6)?)?;

        let google_calendar = match (
            optional("GOOGLE_CALENDAR_API_KEY"),
            optional("GOOGLE_CALENDAR_ID"),
        ) {
            (Some(api_key), Some(calendar_id)) => Some(GoogleCalendarConfig {
                api_key,
                calendar_id,
                base_url: GOOGLE_CALENDAR_BASE_URL.to_string(),
            }),
            _ => None,
        };

        let openai = optional("OPENAI_API_KEY").map(|api_key| OpenAiConfig {
            api_key,
            model: optional("OPENAI_MODEL").unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string()),
            base_url: OPENAI_BASE_URL.to_string(),
        });

        let sendgrid = match (optional("SENDGRID_API_KEY"), optional("SENDGRID_FROM_EMAIL")) {
            (Some(api_key), Some(from_email)) => Some(SendGridConfig {
                api_key,
                from_email,
                base_url: SENDGRID_BASE_URL.to_string(),
            }),
            _ => None,
        };

        let cloudinary = match (
            optional("CLOUDINARY_CLOUD_NAME"),
            optional("CLOUDINARY_API_KEY"),
            optional("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret,
                base_url: CLOUDINARY_BASE_URL.to_string(),
            }),
            _ => None,
        };

        let weather = optional("WEATHER_API_KEY").map(|api_key| WeatherConfig {
            api_key,
            base_url: WEATHER_BASE_URL.to_string(),
        });

        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", 5000)?,
            database_url: required("DATABASE_URL")?,
            admin_username: optional("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
            admin_password: required("ADMIN_PASSWORD")?,
            session_secure: parse_or("SESSION_SECURE", false)?,
            site_offset,
            upload_dir: PathBuf::from(optional("UPLOAD_DIR").unwrap_or_else(|| "uploads".to_string())),
            cors_origin: optional("CORS_ORIGIN"),
            google_calendar,
            openai,
            sendgrid,
            cloudinary,
            weather,
        })
    }
}

/// Reads a variable, treating blank values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

/// Whole-hour UTC offset; anything outside `-23..=23` is rejected.
fn site_offset(hours: i32) -> Result<FixedOffset, ConfigError> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "SITE_UTC_OFFSET_HOURS".to_string(),
            value: hours.to_string(),
        })
}

#[cfg(test)]
impl Config {
    /// Configuration with every integration disabled, for tests.
    pub fn test() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
            session_secure: false,
            site_offset: FixedOffset::west_opt(6 * 3600).unwrap(),
            upload_dir: std::env::temp_dir().join("hill-country-guide-test-uploads"),
            cors_origin: None,
            google_calendar: None,
            openai: None,
            sendgrid: None,
            cloudinary: None,
            weather: None,
        }
    }
}
