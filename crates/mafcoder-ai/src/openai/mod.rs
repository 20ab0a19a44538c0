//! OpenAI Responses API client.
//!
//! Implements the `AiClient` trait against `POST {api_base}/responses`
//! with server-sent event streaming. Local tools are sent as function
//! tools; web search is the provider-hosted `web_search_preview` tool.

mod api;
mod client;
mod config;

pub use client::{OpenAiClient, ResponseAccumulator};
pub use config::OpenAiConfig;
