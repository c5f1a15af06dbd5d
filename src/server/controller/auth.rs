use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with a username and password.
///
/// Compares the password with the stored one and, on success, stores the user's id
/// in a fresh session.
///
/// # Arguments
/// - `state` - Application state containing the in-memory storage
/// - `session` - The caller's session, cycled on success
/// - `payload` - Username and password
///
/// # Returns
/// - `200 OK` - Logged-in user
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.store)
        .login(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and destroy the session.
///
/// # Returns
/// - `204 No Content` - Session cleared, whether or not anyone was logged in
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The session's user
/// - `401 Unauthorized` - Not logged in, or the user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let user = AuthService::new(&state.store)
        .get_user(user_id)
        .await
        .ok_or(AuthError::UserNotInStorage(user_id))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
