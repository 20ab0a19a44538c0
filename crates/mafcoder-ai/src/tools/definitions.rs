//! JSON schemas for the built-in tools, as advertised to the model.

use crate::ToolDefinition;

pub const ADD: &str = "add";
pub const SUBTRACT: &str = "subtract";
pub const RANDOM_IN_RANGE: &str = "random_in_range";
pub const READ_FILE: &str = "read_file";
pub const WRITE_FILE: &str = "write_file";
pub const CREATE_FOLDER: &str = "create_folder";
pub const LIST_FILES_AND_DIRECTORIES: &str = "list_files_and_directories";
pub const INVOKE_COMMAND_LINE: &str = "invoke_command_line";

fn integer_pair(name: &str, description: &str, first: &str, second: &str) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                first: { "type": "integer" },
                second: { "type": "integer" }
            },
            "required": [first, second]
        }),
    }
}

fn path_only(name: &str, description: &str, param: &str, param_description: &str) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                param: {
                    "type": "string",
                    "description": param_description
                }
            },
            "required": [param]
        }),
    }
}

/// Create the built-in tool definitions exposed to the model.
pub fn builtin_tools() -> Vec<ToolDefinition> {
    vec![
        integer_pair(ADD, "Add two integers.", "a", "b"),
        integer_pair(
            RANDOM_IN_RANGE,
            "Return a random integer that is at least min and less than max.",
            "min",
            "max",
        ),
        integer_pair(SUBTRACT, "Subtract b from a.", "a", "b"),
        path_only(
            READ_FILE,
            "Read the full text content of a file.",
            "path",
            "File path relative to the working directory",
        ),
        ToolDefinition {
            name: WRITE_FILE.to_string(),
            description: "Write content to a file, creating it or replacing what is there."
                .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "File path relative to the working directory"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to write"
                    }
                },
                "required": ["path", "content"]
            }),
        },
        path_only(
            LIST_FILES_AND_DIRECTORIES,
            "List the files and directories directly inside a directory, with file sizes.",
            "directory",
            "Directory path relative to the working directory; use \".\" for the working directory itself",
        ),
        path_only(
            CREATE_FOLDER,
            "Create a folder, including any missing parent folders.",
            "path",
            "Folder path relative to the working directory",
        ),
        ToolDefinition {
            name: INVOKE_COMMAND_LINE.to_string(),
            description: "Use this command to execute command line commands. Returns the \
                          output of the command. You won't be able to use commands that \
                          require user interaction."
                .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "command": {
                        "type": "string",
                        "description": "The shell command to execute"
                    }
                },
                "required": ["command"]
            }),
        },
    ]
}

/// Convert a tool definition to the Responses API function-tool format.
pub fn to_openai_tool(tool: &ToolDefinition) -> serde_json::Value {
    serde_json::json!({
        "type": "function",
        "name": tool.name,
        "description": tool.description,
        "parameters": tool.parameters,
    })
}

/// The provider-hosted web search tool. Executed remotely, never locally.
pub fn web_search_tool() -> serde_json::Value {
    serde_json::json!({ "type": "web_search_preview" })
}
