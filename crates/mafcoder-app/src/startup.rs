//! Checks that run before the chat loop starts.

use std::path::{Path, PathBuf};

use mafcoder_common::MafError;
use tracing::debug;

/// Load `KEY=VALUE` lines from `path` into the environment.
///
/// Variables that are already set win. A missing file is not an error.
pub fn load_dotenv(path: &Path) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };
    for (key, value) in contents.lines().filter_map(parse_env_line) {
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }
    debug!(path = %path.display(), "Loaded .env");
}

fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim().trim_matches('"').trim_matches('\'')))
}

/// The API key from `var`. Unset or blank is fatal.
pub fn require_credential(var: &str) -> Result<String, MafError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MafError::MissingCredential(var.to_string())),
    }
}

/// Pick the working directory and the message announcing it.
pub fn resolve_working_directory(arg: Option<PathBuf>) -> Result<(PathBuf, String), MafError> {
    match arg {
        None => {
            let cwd = std::env::current_dir()?;
            let message = format!(
                "No arguments provided. Defaulting to current directory. '{}'",
                cwd.display()
            );
            Ok((cwd, message))
        }
        Some(path) => {
            if !path.is_dir() {
                return Err(MafError::WorkingDirectory(path));
            }
            let root = std::fs::canonicalize(&path)?;
            let message = format!("Using provided working directory: '{}'", path.display());
            Ok((root, message))
        }
    }
}
