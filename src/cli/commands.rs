use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tickd", about = concat!("[x] tickd v", env!("CARGO_PKG_VERSION"), " - a small to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: $XDG_CONFIG_HOME/tickd/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a command script against an empty list, without the TUI
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script to replay (default: stdin)
    pub file: Option<PathBuf>,
    /// Print the final list as JSON
    #[arg(long)]
    pub json: bool,
}
