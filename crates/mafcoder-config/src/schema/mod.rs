//! Configuration schema types for mafcoder.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod agent;
mod console;
mod logging;
mod model;
mod tools;

pub use agent::*;
pub use console::*;
pub use logging::*;
pub use model::*;
pub use tools::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Every option has a default; only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MafConfig {
    pub model: ModelConfig,
    pub agent: AgentConfig,
    pub tools: ToolsConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_stock_agent() {
        let config = MafConfig::default();
        assert_eq!(config.model.name, "gpt-4o");
        assert_eq!(config.agent.instructions, DEFAULT_INSTRUCTIONS);
        assert!(config.agent.web_search);
        assert_eq!(config.agent.max_tool_rounds, 10);
        assert_eq!(config.console.samples.len(), 4);
        assert!(config.console.banner);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: MafConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.name, "gpt-4o");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: MafConfig = toml::from_str(
            r#"
[agent]
web_search = false

[console]
samples = ["List the files"]
"#,
        )
        .unwrap();
        assert!(!config.agent.web_search);
        assert_eq!(config.agent.max_tool_rounds, 10);
        assert_eq!(config.console.samples, vec!["List the files"]);
        assert!(config.console.banner);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = MafConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MafConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model.api_base, config.model.api_base);
        assert_eq!(parsed.console.samples, config.console.samples);
    }
}
