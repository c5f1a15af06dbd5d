//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls with external integrations
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Fallbacks**: Answering with canned content when an integration is unavailable

pub mod attraction;
pub mod auth;
pub mod blog;
pub mod cabin;
pub mod calendar;
pub mod chat;
pub mod destination;
pub mod event;
pub mod integration;
pub mod newsletter;
pub mod quiz;
pub mod season;
pub mod trip;
pub mod upload;
pub mod weather;

#[cfg(test)]
mod test;
