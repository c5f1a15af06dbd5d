use serde::{Deserialize, Serialize};

use crate::server::{
    config::OpenAiConfig, error::AppError, model::chat::ChatMessage,
    service::integration::ensure_success,
};

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a OpenAiConfig,
}

impl<'a> OpenAiClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a OpenAiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Requests a chat completion for `messages` and returns the first choice's text.
    ///
    /// # Returns
    /// - `Ok(String)` - Trimmed reply text
    /// - `Err(AppError::Upstream)` - Error status or a response without content
    /// - `Err(AppError::ReqwestErr)` - Transport or decoding failure
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AppError> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages: messages
                .iter()
                .map(|message| WireMessage {
                    role: message.role.as_str(),
                    content: &message.content,
                })
                .collect(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let completion = ensure_success("OpenAI", response)
            .await?
            .json::<CompletionResponse>()
            .await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AppError::Upstream("OpenAI returned no completion".to_string()))
    }
}
