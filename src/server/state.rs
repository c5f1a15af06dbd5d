//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for seasonal content
//! - In-memory storage for the rest of the guide's content
//! - HTTP client for the external integrations
//! - Loaded configuration
//! - Cache of Google Calendar events

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config, data::mem::MemStorage, service::calendar::cache::CalendarCache,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `MemStorage` and `CalendarCache` wrap an `Arc`
/// - `reqwest::Client` uses an `Arc` internally
/// - `Config` is behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool holding seasons and seasonal activities.
    pub db: DatabaseConnection,

    /// Process-lifetime storage for destinations, events, attractions, cabins, blog
    /// posts, newsletter subscriptions and users.
    pub store: MemStorage,

    /// HTTP client for Google Calendar, OpenAI, SendGrid, Cloudinary and the weather API.
    ///
    /// Configured without redirects so responses come only from the configured hosts.
    pub http_client: reqwest::Client,

    /// Configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// Last Google Calendar fetch, shared with the background sync job.
    pub calendar_cache: CalendarCache,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `store` - In-memory content storage
    /// - `http_client` - HTTP client for external API requests
    /// - `config` - Application configuration
    /// - `calendar_cache` - Google Calendar cache, shared with the scheduler
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        store: MemStorage,
        http_client: reqwest::Client,
        config: Arc<Config>,
        calendar_cache: CalendarCache,
    ) -> Self {
        Self {
            db,
            store,
            http_client,
            config,
            calendar_cache,
        }
    }
}
