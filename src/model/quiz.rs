use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{attraction::AttractionDto, cabin::CabinDto, destination::DestinationDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizOptionDto {
    pub id: String,
    pub label: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionDto {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOptionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizAnswerDto {
    pub question_id: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizMatchRequestDto {
    pub answers: Vec<QuizAnswerDto>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizMatchDto {
    pub destination: DestinationDto,
    pub score: usize,
    pub matched_tags: Vec<String>,
    pub attractions: Vec<AttractionDto>,
    pub cabin: Option<CabinDto>,
}
