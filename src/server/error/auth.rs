use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the request is not logged in.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists in storage.
    #[error("User {0} from session not found in storage")]
    UserNotInStorage(i32),

    /// The user is logged in but lacks a required permission.
    ///
    /// # Fields
    /// - User id of the requester
    /// - Description of the denied action, for the server log
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login attempt with an unknown username or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - Not logged in, stale session or wrong credentials
/// - 403 Forbidden - Logged in without the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInStorage(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient permissions".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
