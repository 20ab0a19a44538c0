//! Local tool guards.

use serde::{Deserialize, Serialize};

/// Optional restrictions on the file and shell tools.
///
/// Both guards are off by default: relative paths are joined onto the
/// working directory as given, and any shell command may run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Reject file-system paths that resolve outside the working directory.
    pub confine_paths: bool,
    /// Program names `invoke_command_line` may start. Empty allows all.
    pub command_allowlist: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_config_defaults_are_permissive() {
        let config = ToolsConfig::default();
        assert!(!config.confine_paths);
        assert!(config.command_allowlist.is_empty());
    }

    #[test]
    fn tools_config_from_toml() {
        let config: ToolsConfig = toml::from_str(
            r#"
confine_paths = true
command_allowlist = ["git", "ls"]
"#,
        )
        .unwrap();
        assert!(config.confine_paths);
        assert_eq!(config.command_allowlist, vec!["git", "ls"]);
    }
}
