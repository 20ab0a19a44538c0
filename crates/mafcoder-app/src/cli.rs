use std::path::PathBuf;

use clap::Parser;

/// mafcoder: a command-line coding agent you can actually understand.
#[derive(Parser, Debug)]
#[command(name = "mafcoder", version, about)]
pub struct Args {
    /// Directory the agent works in. Defaults to the current directory.
    #[arg(value_name = "WORKING_DIRECTORY")]
    pub working_directory: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. "debug" or "mafcoder_ai=trace").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model name override.
    #[arg(long)]
    pub model: Option<String>,

    /// Skip the title banner.
    #[arg(long)]
    pub no_banner: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
