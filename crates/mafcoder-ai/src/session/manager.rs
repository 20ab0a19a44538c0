//! Session struct and thread management.

use mafcoder_common::ThreadId;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn};

use crate::token_tracker::TokenTracker;
use crate::tools::ToolRegistry;
use crate::{Message, ThreadItem, ToolCall};

/// A conversation with its history and the tools the model may call.
pub struct Session {
    pub(super) id: ThreadId,
    /// Conversation history, oldest first. Instructions are not stored here.
    pub(super) thread: Vec<ThreadItem>,
    /// Instructions sent ahead of the thread on every request.
    pub(super) system_prompt: Option<String>,
    pub(super) tools: Option<ToolRegistry>,
    pub(super) tracker: TokenTracker,
    /// Upper bound on tool-call rounds within one user turn.
    pub(super) max_tool_rounds: u32,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: ThreadId::new(),
            thread: Vec::new(),
            system_prompt: None,
            tools: None,
            tracker: TokenTracker::new(),
            max_tool_rounds: 10,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_max_tool_rounds(mut self, max: u32) -> Self {
        self.max_tool_rounds = max;
        self
    }

    /// Run one tool call. Failures become text the model can read.
    ///
    /// Tools do blocking I/O, so on a multi-threaded runtime the worker is
    /// handed over with `block_in_place` while the tool runs.
    pub(crate) fn execute_tool(&self, registry: &ToolRegistry, call: &ToolCall) -> String {
        debug!(tool = %call.name, call_id = %call.id, "Executing tool");
        let run = || registry.invoke(call);
        let result = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(run)
            }
            _ => run(),
        };

        match result {
            Ok(output) => output.to_string(),
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Tool call failed");
                format!("Error: {e}")
            }
        }
    }

    /// Instructions followed by the thread, as sent to the model.
    pub(crate) fn build_messages(&self) -> Vec<ThreadItem> {
        let mut items = Vec::with_capacity(self.thread.len() + 1);
        if let Some(ref system) = self.system_prompt {
            items.push(Message::system(system.clone()).into());
        }
        items.extend(self.thread.iter().cloned());
        items
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    /// The conversation history.
    pub fn thread(&self) -> &[ThreadItem] {
        &self.thread
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn tools(&self) -> Option<&ToolRegistry> {
        self.tools.as_ref()
    }

    /// Forget the history. Instructions and tools stay.
    pub fn clear(&mut self) {
        self.thread.clear();
    }

    pub fn message_count(&self) -> usize {
        self.thread.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
