use std::fs;
use std::path::{Path, PathBuf};

use mafcoder_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::schema::MafConfig;

/// `<os config dir>/mafcoder/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("mafcoder").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Parse the file at `path`. Missing fields take their defaults; range
/// checks are left to `validation`.
pub fn load_from_path(path: &Path) -> Result<MafConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Like `load_from_path`, but a missing file is replaced by the template
/// and the defaults are returned.
pub fn load_or_create(path: &Path) -> Result<MafConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template(path)?;
            Ok(MafConfig::default())
        }
        other => other,
    }
}

/// Load from [`config_path`], creating the file on first run.
pub fn load_default() -> Result<MafConfig, ConfigError> {
    load_or_create(&config_path()?)
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    let io_error = |e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write config {}: {e}", path.display()))
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, default_config_toml()).map_err(io_error)?;
    info!(path = %path.display(), "Created default config");
    Ok(())
}
