pub mod errors;
pub mod id;

pub use errors::{ConfigError, MafError, ToolError};
pub use id::{new_turn_id, ThreadId};

pub type Result<T> = std::result::Result<T, MafError>;
