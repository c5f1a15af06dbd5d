//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models convert into
//! them at the controller boundary.

pub mod api;
pub mod attraction;
pub mod auth;
pub mod blog;
pub mod cabin;
pub mod calendar;
pub mod chat;
pub mod destination;
pub mod event;
pub mod newsletter;
pub mod quiz;
pub mod season;
pub mod trip;
pub mod upload;
pub mod weather;
