use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure of a single tool invocation.
///
/// These never crash the chat loop: the session turns them into text the
/// model can read and react to.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("not found: {0}")]
    NotFound(PathBuf),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("access denied: {0}")]
    AccessDenied(String),
}

impl ToolError {
    /// Classify an `io::Error` raised while touching `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ToolError::NotFound(path)
        } else {
            ToolError::Io { path, source }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MafError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Environment variable {0} is not set. Exiting...")]
    MissingCredential(String),

    #[error("Provided directory '{0}' does not exist. Exiting...")]
    WorkingDirectory(PathBuf),

    #[error("ai error: {0}")]
    Ai(String),
}
