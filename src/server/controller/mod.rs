//! HTTP request handlers.
//!
//! Controllers check access, turn DTOs into domain params, call a service and convert
//! the result back into a DTO. Every handler carries a `utoipa::path` attribute so it
//! shows up in the generated OpenAPI document.

pub mod attraction;
pub mod auth;
pub mod blog;
pub mod cabin;
pub mod calendar;
pub mod chat;
pub mod destination;
pub mod event;
pub mod health;
pub mod newsletter;
pub mod quiz;
pub mod season;
pub mod trip;
pub mod upload;
pub mod weather;
