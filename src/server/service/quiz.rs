//! Travel-style quiz that matches answers to destinations by shared tags.

use std::{cmp::Reverse, collections::BTreeSet};

use crate::server::{
    data::{
        attraction::AttractionRepository, cabin::CabinRepository,
        destination::DestinationRepository, mem::MemStorage,
    },
    error::AppError,
    model::quiz::{QuizMatch, QuizOption, QuizQuestion, DEFAULT_MATCH_LIMIT, MAX_MATCH_LIMIT},
};

const ATTRACTIONS_PER_MATCH: usize = 3;

pub static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "pace",
        prompt: "What does your ideal day look like?",
        options: &[
            QuizOption {
                id: "slow",
                label: "Slow mornings and a long lunch",
                tags: &["relaxation", "food"],
            },
            QuizOption {
                id: "active",
                label: "Up early and out on the trail",
                tags: &["outdoors", "hiking"],
            },
            QuizOption {
                id: "explore",
                label: "Wandering shops and museums",
                tags: &["shopping", "history"],
            },
        ],
    },
    QuizQuestion {
        id: "drink",
        prompt: "Pick a drink for the evening.",
        options: &[
            QuizOption {
                id: "wine",
                label: "A glass of Texas tempranillo",
                tags: &["wine"],
            },
            QuizOption {
                id: "beer",
                label: "A cold beer at a dance hall",
                tags: &["music", "nightlife"],
            },
            QuizOption {
                id: "lemonade",
                label: "Lemonade by the river",
                tags: &["water", "family"],
            },
        ],
    },
    QuizQuestion {
        id: "scenery",
        prompt: "Which view would you rather wake up to?",
        options: &[
            QuizOption {
                id: "river",
                label: "Cypress trees along a swimming hole",
                tags: &["water", "swimming"],
            },
            QuizOption {
                id: "sky",
                label: "A sky full of stars",
                tags: &["stargazing", "outdoors"],
            },
            QuizOption {
                id: "main-street",
                label: "A historic main street",
                tags: &["history", "shopping"],
            },
        ],
    },
    QuizQuestion {
        id: "souvenir",
        prompt: "What are you bringing home?",
        options: &[
            QuizOption {
                id: "art",
                label: "A piece from a local gallery",
                tags: &["art"],
            },
            QuizOption {
                id: "peaches",
                label: "A box of peaches and pecan pie",
                tags: &["food", "family"],
            },
            QuizOption {
                id: "vinyl",
                label: "A record from a live show",
                tags: &["music"],
            },
        ],
    },
];

pub struct QuizService<'a> {
    store: &'a MemStorage,
}

impl<'a> QuizService<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        QUESTIONS
    }

    /// Ranks destinations by how many answer tags they share
    ///
    /// # Arguments
    /// - `tags` - Every tag from every answer; compared case-insensitively
    /// - `limit` - Maximum matches, default 3, capped at 10
    ///
    /// # Returns
    /// - `Ok(Vec<QuizMatch>)` - Matches by score desc, then featured first, then name
    /// - `Err(AppError::BadRequest)` - No non-blank tags were given
    pub async fn match_destinations(
        &self,
        tags: impl IntoIterator<Item = String>,
        limit: Option<usize>,
    ) -> Result<Vec<QuizMatch>, AppError> {
        let wanted: BTreeSet<String> = tags
            .into_iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        if wanted.is_empty() {
            return Err(AppError::BadRequest(
                "Answer at least one question to get a match".to_string(),
            ));
        }
        let limit = limit
            .unwrap_or(DEFAULT_MATCH_LIMIT)
            .clamp(1, MAX_MATCH_LIMIT);

        let mut scored: Vec<_> = DestinationRepository::new(self.store)
            .list()
            .await
            .into_iter()
            .filter_map(|destination| {
                let matched_tags: Vec<String> = destination
                    .tags
                    .iter()
                    .map(|tag| tag.to_lowercase())
                    .filter(|tag| wanted.contains(tag))
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect();
                (!matched_tags.is_empty()).then_some((destination, matched_tags))
            })
            .collect();

        scored.sort_by(|(a, a_tags), (b, b_tags)| {
            (Reverse(a_tags.len()), !a.featured, &a.name).cmp(&(
                Reverse(b_tags.len()),
                !b.featured,
                &b.name,
            ))
        });
        scored.truncate(limit);

        let attraction_repo = AttractionRepository::new(self.store);
        let cabin_repo = CabinRepository::new(self.store);

        let mut matches = Vec::with_capacity(scored.len());
        for (destination, matched_tags) in scored {
            let mut attractions = attraction_repo.by_destination(destination.id).await;
            attractions.truncate(ATTRACTIONS_PER_MATCH);
            let cabin = cabin_repo
                .by_destination(destination.id)
                .await
                .into_iter()
                .next();

            matches.push(QuizMatch {
                score: matched_tags.len(),
                destination,
                matched_tags,
                attractions,
                cabin,
            });
        }

        Ok(matches)
    }
}
