//! Travel assistant chat backed by OpenAI with a canned fallback.

use crate::server::{
    config::Config,
    data::{destination::DestinationRepository, mem::MemStorage},
    error::AppError,
    model::{
        chat::{ChatMessage, ChatReply, ChatRole},
        destination::Destination,
    },
    service::integration::openai::OpenAiClient,
};

/// Most recent history messages forwarded to the model.
const MAX_HISTORY: usize = 10;

const SYSTEM_PROMPT: &str = "You are the friendly travel assistant of the Texas Hill Country \
Guide. Help visitors plan trips to the Texas Hill Country: towns, wineries, swimming holes, \
state parks, festivals and cabin stays. Keep answers short and practical, and suggest the \
destinations listed below when they fit.";

pub struct ChatService<'a> {
    store: &'a MemStorage,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> ChatService<'a> {
    pub fn new(store: &'a MemStorage, http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            store,
            http_client,
            config,
        }
    }

    /// Answers a visitor message
    ///
    /// Falls back to a canned reply naming a few destinations when OpenAI is not
    /// configured or the request fails.
    ///
    /// # Returns
    /// - `Ok(ChatReply)` - Model or canned reply
    /// - `Err(AppError::BadRequest)` - Blank message
    pub async fn reply(
        &self,
        message: &str,
        history: Vec<ChatMessage>,
    ) -> Result<ChatReply, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::BadRequest("Message cannot be empty".to_string()));
        }

        let destinations = DestinationRepository::new(self.store).list().await;

        let Some(openai) = &self.config.openai else {
            tracing::warn!("OpenAI is not configured; sending canned chat reply");
            return Ok(fallback_reply(&destinations));
        };

        let mut messages = Vec::with_capacity(history.len().min(MAX_HISTORY) + 2);
        messages.push(ChatMessage {
            role: ChatRole::System,
            content: system_prompt(&destinations),
        });
        let skip = history.len().saturating_sub(MAX_HISTORY);
        messages.extend(
            history
                .into_iter()
                .skip(skip)
                .filter(|m| m.role != ChatRole::System),
        );
        messages.push(ChatMessage {
            role: ChatRole::User,
            content: message.to_string(),
        });

        match OpenAiClient::new(self.http_client, openai)
            .complete(&messages)
            .await
        {
            Ok(reply) => Ok(ChatReply {
                reply,
                fallback: false,
            }),
            Err(e) => {
                tracing::warn!("OpenAI request failed, sending canned chat reply: {}", e);
                Ok(fallback_reply(&destinations))
            }
        }
    }
}

fn system_prompt(destinations: &[Destination]) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);
    prompt.push_str("\n\nDestinations:");
    for destination in destinations {
        prompt.push_str(&format!(
            "\n- {}: {}",
            destination.name,
            destination
                .short_description
                .as_deref()
                .unwrap_or(&destination.description)
        ));
    }
    prompt
}

fn fallback_reply(destinations: &[Destination]) -> ChatReply {
    let mut featured: Vec<&str> = destinations
        .iter()
        .filter(|d| d.featured)
        .map(|d| d.name.as_str())
        .collect();
    if featured.is_empty() {
        featured = destinations.iter().map(|d| d.name.as_str()).collect();
    }
    featured.truncate(3);

    let reply = if featured.is_empty() {
        "Our travel assistant is taking a break right now. Browse the destinations and \
         events pages to start planning your Hill Country trip."
            .to_string()
    } else {
        format!(
            "Our travel assistant is taking a break right now. In the meantime, take a look \
             at {}. The trip planner can build a day-by-day itinerary for you.",
            featured.join(", ")
        )
    };

    ChatReply {
        reply,
        fallback: true,
    }
}
