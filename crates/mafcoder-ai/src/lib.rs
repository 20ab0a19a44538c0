//! AI engine for mafcoder.
//!
//! Provides:
//! - An OpenAI Responses API client with SSE streaming
//! - Local tools (calculator, file system, shell) behind a static registry
//! - Function-call middleware wrapped around every tool invocation
//! - A conversation session that runs the streaming tool-call loop
//! - Token usage tracking

pub mod middleware;
pub mod openai;
pub mod session;
pub mod streaming;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;

pub use middleware::{format_call, CallLogger, FunctionMiddleware, Next};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::Session;
pub use token_tracker::TokenTracker;
pub use tools::{ToolInvocation, ToolOutput, ToolRegistry, Workspace};

/// The model runtime boundary.
///
/// Given the thread (instructions included as a system message) and the
/// tool descriptors, stream text fragments through `on_chunk` in arrival
/// order and return the complete response, including any function calls
/// the model wants executed before it can continue.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message_streaming(
        &self,
        thread: &[ThreadItem],
        tools: &[ToolDefinition],
        on_chunk: &(dyn Fn(String) + Send + Sync),
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One entry of a conversation thread.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThreadItem {
    Message(Message),
    /// A function call the model asked for.
    FunctionCall(ToolCall),
    /// What the local tool returned for `call_id`.
    FunctionOutput { call_id: String, output: String },
}

impl From<Message> for ThreadItem {
    fn from(message: Message) -> Self {
        ThreadItem::Message(message)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    /// Decoded arguments. Key order is the order the model emitted them.
    pub arguments: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AiError::Timeout
        } else {
            AiError::NetworkError(e.to_string())
        }
    }
}
