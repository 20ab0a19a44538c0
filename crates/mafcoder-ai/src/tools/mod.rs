//! Built-in tools the model can call.
//!
//! Tools are plain functions over a [`Workspace`]; the [`ToolRegistry`]
//! binds them to their JSON schemas and routes every call through the
//! function-call middleware.

mod calculator;
mod definitions;
mod files;
mod invocation;
mod registry;
mod shell;
mod workspace;

pub use calculator::{add, random_in_range, subtract};
pub use definitions::{builtin_tools, to_openai_tool, web_search_tool};
pub use files::{create_folder, list_files_and_directories, read_file, write_file};
pub use invocation::{ToolInvocation, ToolOutput};
pub use registry::{ToolHandler, ToolRegistry};
pub use shell::invoke_command_line;
pub use workspace::Workspace;
