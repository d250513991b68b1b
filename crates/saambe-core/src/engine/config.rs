use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Location of the SAAMBE-3D installation and how to launch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaambeConfig {
    pub interpreter: PathBuf,
    pub home: PathBuf,
    pub script: PathBuf,
}

impl SaambeConfig {
    pub fn script_path(&self) -> PathBuf {
        self.home.join(&self.script)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub run_directory: PathBuf,
    /// Keep the cleaned structure and mutation file after a successful run.
    pub keep_intermediate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdgConfig {
    pub saambe: SaambeConfig,
    pub output: OutputConfig,
}

#[derive(Default)]
pub struct DdgConfigBuilder {
    interpreter: Option<PathBuf>,
    saambe_home: Option<PathBuf>,
    script: Option<PathBuf>,
    run_directory: Option<PathBuf>,
    keep_intermediate: Option<bool>,
}

impl DdgConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interpreter(mut self, path: PathBuf) -> Self {
        self.interpreter = Some(path);
        self
    }
    pub fn saambe_home(mut self, path: PathBuf) -> Self {
        self.saambe_home = Some(path);
        self
    }
    pub fn script(mut self, path: PathBuf) -> Self {
        self.script = Some(path);
        self
    }
    pub fn run_directory(mut self, path: PathBuf) -> Self {
        self.run_directory = Some(path);
        self
    }
    pub fn keep_intermediate(mut self, keep: bool) -> Self {
        self.keep_intermediate = Some(keep);
        self
    }

    pub fn build(self) -> Result<DdgConfig, ConfigError> {
        let saambe = SaambeConfig {
            interpreter: self
                .interpreter
                .ok_or(ConfigError::MissingParameter("interpreter"))?,
            home: self
                .saambe_home
                .ok_or(ConfigError::MissingParameter("saambe_home"))?,
            script: self.script.ok_or(ConfigError::MissingParameter("script"))?,
        };
        let output = OutputConfig {
            run_directory: self
                .run_directory
                .ok_or(ConfigError::MissingParameter("run_directory"))?,
            keep_intermediate: self.keep_intermediate.unwrap_or(false),
        };
        Ok(DdgConfig { saambe, output })
    }
}
