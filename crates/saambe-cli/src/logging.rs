use crate::error::{CliError, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(CliError::Io)?;
        }
        let file = File::create(&path).map_err(CliError::Io)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| CliError::Other(anyhow::anyhow!(e)))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| CliError::Other(anyhow::anyhow!(e)))?;
    }

    Ok(())
}
