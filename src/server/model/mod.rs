//! Server-side domain models and parameter types.
//!
//! Domain models are what the storage layer holds and the services return. They are
//! converted from DTOs into `*Params` at the controller boundary and back into DTOs
//! with `into_dto()` before being serialized.

pub mod attraction;
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
pub mod user;
pub mod weather;
