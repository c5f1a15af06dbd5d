use crate::{
    model::quiz::{QuizMatchDto, QuizOptionDto, QuizQuestionDto},
    server::model::{attraction::Attraction, cabin::Cabin, destination::Destination},
};

pub const DEFAULT_MATCH_LIMIT: usize = 3;
pub const MAX_MATCH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOption {
    pub id: &'static str,
    pub label: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl QuizQuestion {
    pub fn into_dto(&self) -> QuizQuestionDto {
        QuizQuestionDto {
            id: self.id.to_string(),
            prompt: self.prompt.to_string(),
            options: self
                .options
                .iter()
                .map(|option| QuizOptionDto {
                    id: option.id.to_string(),
                    label: option.label.to_string(),
                    tags: option.tags.iter().map(|tag| tag.to_string()).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizMatch {
    pub destination: Destination,
    pub score: usize,
    /// Lowercase tags shared between the answers and the destination, sorted.
    pub matched_tags: Vec<String>,
    pub attractions: Vec<Attraction>,
    pub cabin: Option<Cabin>,
}

impl QuizMatch {
    pub fn into_dto(self) -> QuizMatchDto {
        QuizMatchDto {
            destination: self.destination.into_dto(),
            score: self.score,
            matched_tags: self.matched_tags,
            attractions: self
                .attractions
                .into_iter()
                .map(Attraction::into_dto)
                .collect(),
            cabin: self.cabin.map(Cabin::into_dto),
        }
    }
}
