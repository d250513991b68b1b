mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 SAAMBE CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Compute(args) => {
            info!("Dispatching to 'compute' command.");
            commands::compute::run(args)
        }
        Commands::Validate(args) => {
            info!("Dispatching to 'validate' command.");
            commands::validate::run(args)
        }
        Commands::Expand(args) => {
            info!("Dispatching to 'expand' command.");
            commands::expand::run(args)
        }
        Commands::Normalize(args) => {
            info!("Dispatching to 'normalize' command.");
            commands::normalize::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
