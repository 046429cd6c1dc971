//! Chat gateway: forwards a question plus the dataset digest to a hosted
//! chat-completion deployment and relays the reply.
//!
//! [`ChatService::chat`] never fails. A missing deployment, a transport fault
//! or an upstream error all become a fixed in-character reply with a
//! [`ChatReplyStatus`] the caller can tell apart.

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::api::{ChatMessage, ChatReply, ChatReplyStatus, ChatRole};
use crate::config::ChatConfig;

pub const PERSONA_PROMPT: &str = "You are the Taskmaster's data analyst: a witty, knowledgeable \
assistant who speaks with the authority and dry humour of Greg Davies from Taskmaster UK. You have \
access to detailed data about Taskmaster UK contestants and their performance.

Your role:
- Answer questions about contestant performance, trends and patterns
- Give data-driven insights with specific numbers
- Be entertaining, with the Taskmaster's commanding presence and sardonic wit
- When comparing contestants, cite their actual stats
- If asked about data you don't have, say so honestly but stay in character

Keep responses concise but insightful. Back up your claims with the data below.

Here is the dataset you have access to:

";

pub const UNCONFIGURED_REPLY: &str = "The Taskmaster's communication device (Azure OpenAI) hasn't \
been configured yet. Set AZURE_OPENAI_ENDPOINT and AZURE_OPENAI_DEPLOYMENT environment variables.";

pub const UNAVAILABLE_REPLY: &str = "The Taskmaster's communication device is on the blink. \
Chat service unavailable, try again shortly.";

pub const SPEECHLESS_REPLY: &str = "The Taskmaster is speechless. Try again.";

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

/// Errors from the upstream chat-completion call.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat completion is not configured")]
    NotConfigured,

    /// Network, TLS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream error ({status}): {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    /// The upstream answered with no usable content.
    #[error("Upstream returned an empty reply")]
    EmptyReply,
}

/// A chat-completion backend.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Complete the conversation, returning the assistant's text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Azure OpenAI chat-completions client.
pub struct AzureOpenAiClient {
    http_client: ReqwestClient,
    url: String,
    api_key: String,
}

impl AzureOpenAiClient {
    /// Build a client for the configured deployment.
    ///
    /// # Errors
    /// * `ChatError::NotConfigured` - Endpoint or key is missing
    /// * `ChatError::Transport` - The HTTP client could not be built
    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        if !config.is_configured() {
            return Err(ChatError::NotConfigured);
        }
        let endpoint = config.endpoint.as_deref().ok_or(ChatError::NotConfigured)?;
        let api_key = config.api_key.as_deref().ok_or(ChatError::NotConfigured)?;

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            url: format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                config.deployment,
                config.api_version
            ),
            api_key: api_key.to_string(),
        })
    }

    /// Full request URL, including the api-version query.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatCompletionClient for AzureOpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let request = CompletionRequest {
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http_client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(ChatError::Upstream { status, body });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::EmptyReply)
    }
}

/// Builds grounded conversations and shields callers from upstream faults.
#[derive(Clone)]
pub struct ChatService {
    client: Option<Arc<dyn ChatCompletionClient>>,
}

impl ChatService {
    pub fn new(client: Option<Arc<dyn ChatCompletionClient>>) -> Self {
        Self { client }
    }

    /// A service backed by Azure OpenAI when the deployment is configured.
    pub fn from_config(config: &ChatConfig) -> Self {
        match AzureOpenAiClient::from_config(config) {
            Ok(client) => Self::new(Some(Arc::new(client))),
            Err(ChatError::NotConfigured) => Self::new(None),
            Err(e) => {
                warn!("Chat client could not be built, chat disabled: {}", e);
                Self::new(None)
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// The conversation sent upstream: persona and digest, the caller's
    /// history without any system turns, then the new message.
    pub fn build_messages(
        message: &str,
        history: &[ChatMessage],
        grounding: &str,
    ) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(format!("{}{}", PERSONA_PROMPT, grounding)));
        messages.extend(
            history
                .iter()
                .filter(|m| m.role != ChatRole::System)
                .cloned(),
        );
        messages.push(ChatMessage::user(message));
        messages
    }

    /// Answer `message`; always returns a reply.
    pub async fn chat(&self, message: &str, history: &[ChatMessage], grounding: &str) -> ChatReply {
        let Some(client) = &self.client else {
            return ChatReply {
                response: UNCONFIGURED_REPLY.to_string(),
                status: ChatReplyStatus::Unconfigured,
            };
        };

        let messages = Self::build_messages(message, history, grounding);
        debug!(
            "Forwarding chat with {} turn(s), grounding {} chars",
            messages.len(),
            grounding.len()
        );

        match client.complete(&messages).await {
            Ok(response) => ChatReply {
                response,
                status: ChatReplyStatus::Answered,
            },
            Err(ChatError::EmptyReply) => ChatReply {
                response: SPEECHLESS_REPLY.to_string(),
                status: ChatReplyStatus::Answered,
            },
            Err(ChatError::NotConfigured) => ChatReply {
                response: UNCONFIGURED_REPLY.to_string(),
                status: ChatReplyStatus::Unconfigured,
            },
            Err(e) => {
                error!("Chat completion failed: {}", e);
                ChatReply {
                    response: UNAVAILABLE_REPLY.to_string(),
                    status: ChatReplyStatus::Unavailable,
                }
            }
        }
    }
}
