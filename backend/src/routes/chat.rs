//! Request and response types for the chat assistant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }
}

/// New message plus the caller's prior turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// How a reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatReplyStatus {
    /// The upstream model answered.
    Answered,
    /// No upstream model is configured.
    Unconfigured,
    /// The upstream model failed; the reply is a fixed fallback.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub status: ChatReplyStatus,
}

pub const POST_CHAT: &str = "chat";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "Who won series 1?"}"#).unwrap();
        assert_eq!(req.message, "Who won series 1?");
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_roles_are_lowercase() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role": "assistant", "content": "Hello."}"#).unwrap();
        assert_eq!(msg, ChatMessage::assistant("Hello."));
        assert_eq!(
            serde_json::to_string(&ChatReplyStatus::Unavailable).unwrap(),
            r#""unavailable""#
        );
    }
}
