//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`.

mod agent;
mod console;
mod helpers;
mod model;


use crate::schema::MafConfig;
use mafcoder_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MafConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);
    agent::validate_agent(&mut errors, config);
    console::validate_console(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
