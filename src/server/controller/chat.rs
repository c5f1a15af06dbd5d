use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatRequestDto, ChatResponseDto},
    },
    server::{
        error::AppError, model::chat::ChatMessage, service::chat::ChatService, state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Ask the travel assistant a question.
///
/// Answers come from the configured language model, primed with the guide's
/// destinations. When the model is unavailable a canned reply is returned with
/// `fallback` set.
///
/// # Returns
/// - `200 OK` - The assistant's reply
/// - `400 Bad Request` - Blank message
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = CHAT_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseDto),
        (status = 400, description = "Blank message", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let history = payload
        .history
        .into_iter()
        .map(ChatMessage::from_dto)
        .collect();

    let reply = ChatService::new(&state.store, &state.http_client, &state.config)
        .reply(&payload.message, history)
        .await?;

    Ok((StatusCode::OK, Json(reply.into_dto())))
}
