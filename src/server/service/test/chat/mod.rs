use mockito::Matcher;

use crate::server::{
    config::{Config, OpenAiConfig},
    model::chat::{ChatMessage, ChatRole},
    service::chat::ChatService,
};

use super::*;

mod reply;

fn openai_config(base_url: String) -> Config {
    let mut config = Config::test();
    config.openai = Some(OpenAiConfig {
        api_key: "sk-test".to_string(),
        model: "gpt-4o-mini".to_string(),
        base_url,
    });
    config
}
