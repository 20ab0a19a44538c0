//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# mafcoder configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gpt-4o"
# api_base = "https://api.openai.com/v1"
# api_key_env = "OPENAI_API_KEY"
# max_output_tokens = 4096      # 16-128000

[agent]
# instructions = "You are an annoyingly friendly AI Assistant. Explain what you are doing."
# web_search = true             # hosted web search tool
# max_tool_rounds = 10          # 1-100

[tools]
# confine_paths = false         # reject paths outside the working directory
# command_allowlist = []        # e.g. ["git", "ls", "cargo"]; empty = any command

[console]
# banner = true
# samples = [
#   "Add 2 random numbers",
#   "What files are in the current directory? Just give a summary.",
# ]

[logging]
# level = "warn"                # trace, debug, info, warn, error
"##
    .to_string()
}
