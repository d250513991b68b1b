use crate::engine::config::SaambeConfig;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("SAAMBE-3D script not found at '{}'", .0.display())]
    MissingScript(PathBuf),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("SAAMBE-3D exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },

    #[error("SAAMBE-3D reported success but wrote no output to '{}'", .0.display())]
    MissingOutput(PathBuf),
}

/// Files handed to a predictor for one batch of mutations.
#[derive(Debug, Clone, Copy)]
pub struct PredictionRequest<'a> {
    pub structure: &'a Path,
    pub mutation_file: &'a Path,
    pub output: &'a Path,
}

/// Anything able to turn a cleaned structure and a mutation file into raw ddG output.
pub trait DdgPredictor {
    fn predict(&self, request: &PredictionRequest<'_>) -> Result<(), RunnerError>;
}

#[derive(Debug, Clone)]
pub struct SaambeRunner {
    config: SaambeConfig,
}

impl SaambeRunner {
    pub fn new(config: SaambeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SaambeConfig {
        &self.config
    }

    pub fn arguments(&self, request: &PredictionRequest<'_>) -> Vec<OsString> {
        vec![
            self.config.script_path().into_os_string(),
            "-i".into(),
            request.structure.as_os_str().to_owned(),
            "-d".into(),
            "1".into(),
            "-o".into(),
            request.output.as_os_str().to_owned(),
            "-f".into(),
            request.mutation_file.as_os_str().to_owned(),
        ]
    }

    pub fn command(&self, request: &PredictionRequest<'_>) -> Command {
        let mut command = Command::new(&self.config.interpreter);
        command.args(self.arguments(request));
        command
    }
}

impl DdgPredictor for SaambeRunner {
    #[instrument(skip_all, name = "saambe_predict")]
    fn predict(&self, request: &PredictionRequest<'_>) -> Result<(), RunnerError> {
        let script = self.config.script_path();
        if !script.is_file() {
            return Err(RunnerError::MissingScript(script));
        }

        let mut command = self.command(request);
        info!("Running {:?}", command);
        let output = command.output().map_err(|source| RunnerError::Spawn {
            program: self.config.interpreter.display().to_string(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stdout.trim().is_empty() {
            debug!(target: "saambe::stdout", "{}", stdout.trim_end());
        }

        if !output.status.success() {
            return Err(RunnerError::ExitStatus {
                status: output.status,
                stderr,
            });
        }
        if !stderr.is_empty() {
            warn!("SAAMBE-3D stderr: {}", stderr);
        }
        if !request.output.is_file() {
            return Err(RunnerError::MissingOutput(request.output.to_path_buf()));
        }
        Ok(())
    }
}
