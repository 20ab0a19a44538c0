//! Model provider settings.

use serde::{Deserialize, Serialize};

/// Which model to talk to and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier sent with every request.
    pub name: String,
    /// Base URL of the Responses API (no trailing `/responses`).
    pub api_base: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Upper bound on generated tokens per request (valid range: 16-128000).
    pub max_output_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gpt-4o".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_output_tokens: 4096,
        }
    }
}
