mod cli;
mod console;
mod repl;
mod startup;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use colored::Colorize;
use mafcoder_ai::{CallLogger, OpenAiClient, OpenAiConfig, Session, ToolRegistry, Workspace};
use mafcoder_common::MafError;
use mafcoder_config::schema::LogLevel;
use mafcoder_config::MafConfig;
use tracing_subscriber::EnvFilter;

use console::Console;

/// Crates whose verbosity `logging.level` controls.
const LOG_TARGETS: [&str; 4] = ["mafcoder", "mafcoder_ai", "mafcoder_config", "mafcoder_common"];

/// Filter precedence: `--log-level`, then `RUST_LOG`, then the config level.
fn log_filter(cli_directive: Option<&str>, level: LogLevel) -> EnvFilter {
    let from_config = || {
        let directives = LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={}", level.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(format!("warn,{directives}"))
    };

    match cli_directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("Invalid --log-level '{directive}': {e}");
            from_config()
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| from_config()),
    }
}

fn init_logging(cli_directive: Option<&str>, level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli_directive, level))
        .with_writer(std::io::stderr)
        .init();
}

fn apply_overrides(config: &mut MafConfig, args: &cli::Args) {
    if let Some(ref model) = args.model {
        config.model.name = model.clone();
    }
    if args.no_banner {
        config.console.banner = false;
    }
}

async fn run(args: cli::Args) -> Result<(), MafError> {
    let mut config = mafcoder_config::load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    init_logging(args.log_level.as_deref(), config.logging.level);

    tracing::info!("mafcoder v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::debug!(config = %mafcoder_config::config_to_json(&config), "Config loaded");

    let console = Console::stdout();
    if config.console.banner {
        console.banner();
    }

    let api_key = startup::require_credential(&config.model.api_key_env)?;
    let (root, message) = startup::resolve_working_directory(args.working_directory.clone())?;
    console.line(&message);
    tracing::info!(root = %root.display(), model = %config.model.name, "Session starting");

    let workspace = Workspace::new(root)
        .with_confined_paths(config.tools.confine_paths)
        .with_command_allowlist(config.tools.command_allowlist.clone());
    let log_sink = console.clone();
    let registry = ToolRegistry::builtin(workspace).with_middleware(Arc::new(CallLogger::new(
        move |line| log_sink.function_log(line),
    )));

    let client = OpenAiClient::new(
        OpenAiConfig::new(api_key)
            .with_api_base(config.model.api_base.clone())
            .with_model(config.model.name.clone())
            .with_max_output_tokens(config.model.max_output_tokens)
            .with_web_search(config.agent.web_search),
    )
    .map_err(|e| MafError::Ai(e.to_string()))?;

    let mut session = Session::new()
        .with_system_prompt(config.agent.instructions.clone())
        .with_tools(registry)
        .with_max_tool_rounds(config.agent.max_tool_rounds);
    tracing::debug!(thread = %session.id(), "Thread created");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&mut session, &client, &console, &config.console.samples, stdin).await?;

    let usage = session.tracker();
    tracing::info!(
        requests = usage.call_count(),
        tokens = usage.total_tokens(),
        "Session ended"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    startup::load_dotenv(Path::new(".env"));

    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn overrides_replace_config_values() {
        let mut config = MafConfig::default();
        let args = cli::Args::parse_from(["mafcoder", "--model", "gpt-4.1-mini", "--no-banner"]);
        apply_overrides(&mut config, &args);
        assert_eq!(config.model.name, "gpt-4.1-mini");
        assert!(!config.console.banner);
    }

    #[test]
    fn no_overrides_keep_config() {
        let mut config = MafConfig::default();
        let args = cli::Args::parse_from(["mafcoder"]);
        apply_overrides(&mut config, &args);
        assert_eq!(config.model.name, "gpt-4o");
        assert!(config.console.banner);
    }

    #[test]
    fn config_level_applies_to_every_crate() {
        let filter = log_filter(Some("mafcoder_ai=trace"), LogLevel::Warn).to_string();
        assert!(filter.contains("mafcoder_ai=trace"));

        let filter = log_filter(Some("mafcoder=loud"), LogLevel::Debug).to_string();
        for target in LOG_TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }
}
