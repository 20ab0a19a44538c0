//! OpenAI client struct, request building, and stream accumulation.

use serde_json::{json, Value};
use tracing::warn;

use crate::streaming::SseEvent;
use crate::tools::{to_openai_tool, web_search_tool};
use crate::{AiError, AiResponse, Role, ThreadItem, TokenUsage, ToolCall, ToolDefinition};

use super::config::OpenAiConfig;

/// OpenAI Responses API client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub(crate) fn responses_url(&self) -> String {
        format!("{}/responses", self.config.api_base.trim_end_matches('/'))
    }

    /// Build the JSON request body for a streaming Responses API call.
    ///
    /// System messages become `instructions`; everything else is sent as
    /// `input` items in thread order.
    pub(crate) fn build_request_body(
        &self,
        thread: &[ThreadItem],
        tools: &[ToolDefinition],
    ) -> Value {
        let mut instructions: Vec<&str> = Vec::new();
        let mut input = Vec::with_capacity(thread.len());

        for item in thread {
            match item {
                ThreadItem::Message(msg) => {
                    let role = match msg.role {
                        Role::System => {
                            instructions.push(&msg.content);
                            continue;
                        }
                        Role::User => "user",
                        Role::Assistant => "assistant",
                    };
                    input.push(json!({ "role": role, "content": msg.content }));
                }
                ThreadItem::FunctionCall(call) => input.push(json!({
                    "type": "function_call",
                    "call_id": call.id,
                    "name": call.name,
                    "arguments": call.arguments.to_string(),
                })),
                ThreadItem::FunctionOutput { call_id, output } => input.push(json!({
                    "type": "function_call_output",
                    "call_id": call_id,
                    "output": output,
                })),
            }
        }

        let mut body = json!({
            "model": self.config.model,
            "max_output_tokens": self.config.max_output_tokens,
            "input": input,
            "stream": true,
            "store": false,
        });

        if !instructions.is_empty() {
            body["instructions"] = json!(instructions.join("\n\n"));
        }

        let mut tool_defs: Vec<Value> = tools.iter().map(to_openai_tool).collect();
        if self.config.web_search {
            tool_defs.push(web_search_tool());
        }
        if !tool_defs.is_empty() {
            body["tools"] = json!(tool_defs);
        }

        body
    }
}

/// Folds streamed Responses API events into an `AiResponse`.
#[derive(Debug, Default)]
pub struct ResponseAccumulator {
    content: String,
    tool_calls: Vec<ToolCall>,
    usage: TokenUsage,
    error: Option<String>,
}

impl ResponseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one event. Returns the text fragment to display, if any.
    pub fn handle(&mut self, event: &SseEvent) -> Option<String> {
        if event.data == "[DONE]" {
            return None;
        }
        let data: Value = match serde_json::from_str(&event.data) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Skipping malformed stream event");
                return None;
            }
        };
        let event_type = event
            .event
            .as_deref()
            .or_else(|| data["type"].as_str())
            .unwrap_or("");

        match event_type {
            "response.output_text.delta" => {
                let delta = data["delta"].as_str().filter(|d| !d.is_empty())?;
                self.content.push_str(delta);
                return Some(delta.to_string());
            }
            "response.output_item.done" => {
                let item = &data["item"];
                if item["type"] == "function_call" {
                    self.tool_calls.push(parse_function_call(item));
                }
            }
            "response.completed" => {
                let usage = &data["response"]["usage"];
                self.usage = TokenUsage {
                    input_tokens: usage["input_tokens"].as_u64().unwrap_or(0),
                    output_tokens: usage["output_tokens"].as_u64().unwrap_or(0),
                };
            }
            "response.incomplete" => {
                let reason = data["response"]["incomplete_details"]["reason"]
                    .as_str()
                    .unwrap_or("unknown");
                warn!(reason, "Response ended incomplete");
            }
            "response.failed" => {
                self.error = Some(
                    data["response"]["error"]["message"]
                        .as_str()
                        .unwrap_or("response failed")
                        .to_string(),
                );
            }
            "error" => {
                self.error = Some(
                    data["message"]
                        .as_str()
                        .or_else(|| data["error"]["message"].as_str())
                        .unwrap_or("stream error")
                        .to_string(),
                );
            }
            _ => {}
        }
        None
    }

    pub fn finish(self) -> Result<AiResponse, AiError> {
        if let Some(message) = self.error {
            return Err(AiError::ApiError(message));
        }
        if self.usage.total_tokens() == 0 {
            warn!("No usage data received in streaming response");
        }
        Ok(AiResponse {
            content: self.content,
            tool_calls: self.tool_calls,
            usage: self.usage,
        })
    }
}

/// Arguments arrive as a JSON-encoded string. Undecodable arguments are kept
/// as the raw string so the tool call fails with a readable error.
fn parse_function_call(item: &Value) -> ToolCall {
    let raw = item["arguments"].as_str().unwrap_or("");
    let arguments = if raw.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
    };
    ToolCall {
        id: item["call_id"].as_str().unwrap_or("").to_string(),
        name: item["name"].as_str().unwrap_or("").to_string(),
        arguments,
    }
}
