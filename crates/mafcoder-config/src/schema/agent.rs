//! Agent behavior: instructions, hosted tools, tool-loop limits.

use serde::{Deserialize, Serialize};

pub const DEFAULT_INSTRUCTIONS: &str =
    "You are an annoyingly friendly AI Assistant. Explain what you are doing.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// System instruction sent with every request.
    pub instructions: String,
    /// Advertise the provider-hosted web search tool.
    pub web_search: bool,
    /// Maximum model round trips per user turn that may execute tools
    /// (valid range: 1-100).
    pub max_tool_rounds: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            web_search: true,
            max_tool_rounds: 10,
        }
    }
}
