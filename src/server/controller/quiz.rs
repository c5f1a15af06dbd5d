use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        quiz::{QuizMatchDto, QuizMatchRequestDto, QuizQuestionDto},
    },
    server::{
        error::AppError,
        model::quiz::{QuizMatch, QuizQuestion},
        service::quiz::QuizService,
        state::AppState,
    },
};

/// Tag for grouping quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

#[utoipa::path(
    get,
    path = "/api/quiz/questions",
    tag = QUIZ_TAG,
    responses(
        (status = 200, description = "Quiz questions with the tags of each option", body = Vec<QuizQuestionDto>)
    ),
)]
pub async fn get_questions(State(state): State<AppState>) -> impl IntoResponse {
    let questions = QuizService::new(&state.store).questions();

    Json(
        questions
            .iter()
            .map(QuizQuestion::into_dto)
            .collect::<Vec<_>>(),
    )
}

/// Match quiz answers against destination tags.
///
/// # Returns
/// - `200 OK` - Best matches with a few attractions and a cabin each
/// - `400 Bad Request` - Answers carry no tags
#[utoipa::path(
    post,
    path = "/api/quiz/match",
    tag = QUIZ_TAG,
    request_body = QuizMatchRequestDto,
    responses(
        (status = 200, description = "Matching destinations", body = Vec<QuizMatchDto>),
        (status = 400, description = "No answer tags", body = ErrorDto)
    ),
)]
pub async fn match_quiz(
    State(state): State<AppState>,
    Json(payload): Json<QuizMatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let tags = payload
        .answers
        .into_iter()
        .flat_map(|answer| answer.tags);

    let matches = QuizService::new(&state.store)
        .match_destinations(tags, payload.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            matches
                .into_iter()
                .map(QuizMatch::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
