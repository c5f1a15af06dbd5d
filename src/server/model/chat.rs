use crate::model::chat::{ChatMessageDto, ChatResponseDto, ChatRoleDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn from_dto(dto: ChatMessageDto) -> Self {
        Self {
            role: match dto.role {
                ChatRoleDto::User => ChatRole::User,
                ChatRoleDto::Assistant => ChatRole::Assistant,
            },
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    pub fallback: bool,
}

impl ChatReply {
    pub fn into_dto(self) -> ChatResponseDto {
        ChatResponseDto {
            reply: self.reply,
            fallback: self.fallback,
        }
    }
}
