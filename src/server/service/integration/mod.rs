//! Thin clients for third-party APIs.
//!
//! Each client borrows the shared `reqwest::Client` and its config section. Failures
//! surface as `AppError`; callers decide whether to fall back to canned content.

pub mod cloudinary;
pub mod google_calendar;
pub mod openai;
pub mod sendgrid;
pub mod weather;

use crate::server::error::AppError;

/// Turns a non-success response into `AppError::Upstream`, keeping the body for the log.
pub(crate) async fn ensure_success(
    service: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::Upstream(format!(
        "{} returned {}: {}",
        service, status, body
    )))
}
