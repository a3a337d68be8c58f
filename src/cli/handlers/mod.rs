mod run;
pub use run::cmd_run;

use tracing::info;

use crate::cli::commands::{Cli, Commands};
use crate::io::config_io;
use crate::logging::{self, Fallback};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => {
            // The TUI owns the terminal: only log when a file was given
            logging::init_tracing(cli.verbose, cli.log_file.as_deref(), Fallback::Silent)?;
            let config = config_io::load_config(cli.config.as_deref())?;
            info!(
                unique_titles_on_rename = config.tasks.unique_titles_on_rename,
                "launching TUI"
            );
            crate::tui::run(&config)
        }
        Some(Commands::Run(args)) => {
            logging::init_tracing(cli.verbose, cli.log_file.as_deref(), Fallback::Stderr)?;
            let config = config_io::load_config(cli.config.as_deref())?;
            cmd_run(&args, &config)
        }
    }
}
