//! mafcoder configuration.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mafcoder_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{MafConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use mafcoder_common::ConfigError;

/// Load and validate the config.
///
/// With `path`, that file must exist. Without it, `config.toml` is read
/// from the OS config directory and created with defaults when missing.
pub fn load_config(path: Option<&Path>) -> Result<MafConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MafConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
