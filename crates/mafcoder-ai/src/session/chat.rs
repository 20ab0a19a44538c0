//! The streaming chat turn and its tool-call loop.

use tracing::{debug, warn};

use crate::tools::ToolRegistry;
use crate::{AiClient, AiError, Message, ThreadItem};

use super::manager::Session;

impl Session {
    /// Send `user_message` and stream the reply through `on_chunk`.
    ///
    /// When the model asks for function calls, each one is executed through
    /// the registry, the call and its output are appended to the thread, and
    /// the model is asked again. Returns all assistant text of the turn.
    pub async fn chat_streaming(
        &mut self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
        on_chunk: &(dyn Fn(String) + Send + Sync),
    ) -> Result<String, AiError> {
        self.thread.push(Message::user(user_message).into());

        let definitions = self
            .tools
            .as_ref()
            .map(ToolRegistry::definitions)
            .unwrap_or_default();
        let mut reply = String::new();
        let mut rounds = 0;

        loop {
            let request = self.build_messages();
            let response = client
                .send_message_streaming(&request, &definitions, on_chunk)
                .await?;
            self.tracker.record(&response.usage);

            if !response.content.is_empty() {
                reply.push_str(&response.content);
                self.thread
                    .push(Message::assistant(response.content.clone()).into());
            }

            let Some(registry) = self.tools.as_ref() else {
                return Ok(reply);
            };
            if response.tool_calls.is_empty() {
                return Ok(reply);
            }

            rounds += 1;
            if rounds > self.max_tool_rounds {
                warn!(
                    max = self.max_tool_rounds,
                    "Max tool rounds reached, ending turn"
                );
                return Ok(reply);
            }

            debug!(round = rounds, calls = response.tool_calls.len(), "Tool round");
            let mut results = Vec::with_capacity(response.tool_calls.len() * 2);
            for call in response.tool_calls {
                let output = self.execute_tool(registry, &call);
                let call_id = call.id.clone();
                results.push(ThreadItem::FunctionCall(call));
                results.push(ThreadItem::FunctionOutput { call_id, output });
            }
            self.thread.extend(results);
        }
    }
}
