//! AiClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::streaming::{parse_sse_stream, SseEvent};
use crate::{AiClient, AiError, AiResponse, ThreadItem, ToolDefinition};

use super::client::{OpenAiClient, ResponseAccumulator};

#[async_trait]
impl AiClient for OpenAiClient {
    async fn send_message_streaming(
        &self,
        thread: &[ThreadItem],
        tools: &[ToolDefinition],
        on_chunk: &(dyn Fn(String) + Send + Sync),
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(thread, tools);

        debug!(
            model = %self.config.model,
            items = thread.len(),
            tools = tools.len(),
            "OpenAI streaming request"
        );

        let response = self
            .http
            .post(self.responses_url())
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let mut accumulator = ResponseAccumulator::new();
        parse_sse_stream(response, |event: SseEvent| {
            if let Some(chunk) = accumulator.handle(&event) {
                on_chunk(chunk);
            }
        })
        .await?;

        let response = accumulator.finish()?;
        debug!(
            tool_calls = response.tool_calls.len(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "OpenAI response complete"
        );
        Ok(response)
    }
}
