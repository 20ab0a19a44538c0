//! Console presentation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Print the title banner at startup.
    pub banner: bool,
    /// Prompts offered when the user presses Enter on an empty line.
    pub samples: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: true,
            samples: vec![
                "Add 2 random numbers".to_string(),
                "What files are in the current directory? Just give a summary.".to_string(),
                "Use command line to get the date".to_string(),
                "Create a new Hello World Rust app here, using the invoke_command_line tool."
                    .to_string(),
            ],
        }
    }
}
