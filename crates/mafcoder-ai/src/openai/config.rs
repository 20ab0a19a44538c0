//! OpenAI client configuration.

use std::fmt;

use crate::AiError;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub max_output_tokens: u32,
    /// Advertise the hosted web search tool alongside the local tools.
    pub web_search: bool,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("web_search", &self.web_search)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: 4096,
            web_search: true,
        }
    }

    /// Read the API key from the environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self, AiError> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AiError::ApiError(format!(
                "OpenAI API not configured. Set {var}."
            ))),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_key() {
        let config = OpenAiConfig::new("sk-secret-value");
        let shown = format!("{config:?}");
        assert!(shown.contains("[REDACTED]"));
        assert!(!shown.contains("sk-secret-value"));
    }

    #[test]
    fn builders_override_defaults() {
        let config = OpenAiConfig::new("k")
            .with_model("gpt-4.1-mini")
            .with_api_base("http://localhost:8080/v1")
            .with_max_output_tokens(256)
            .with_web_search(false);
        assert_eq!(config.model, "gpt-4.1-mini");
        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert_eq!(config.max_output_tokens, 256);
        assert!(!config.web_search);
    }

    #[test]
    fn from_env_missing_var() {
        let err = OpenAiConfig::from_env("MAFCODER_TEST_KEY_THAT_IS_NEVER_SET").unwrap_err();
        assert!(err.to_string().contains("MAFCODER_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
