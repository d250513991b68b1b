use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSaambeConfig {
    pub home: Option<PathBuf>,
    pub interpreter: Option<PathBuf>,
    pub script: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutputConfig {
    pub keep_intermediate: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub saambe: Option<FileSaambeConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_kebab_case_sections() {
        let config = FileConfig::from_toml(
            r#"
            [saambe]
            home = "/opt/saambe-1.0/saambe"
            interpreter = "python3"

            [output]
            keep-intermediate = true
            "#,
        )
        .unwrap();
        let saambe = config.saambe.unwrap();
        assert_eq!(saambe.home, Some(PathBuf::from("/opt/saambe-1.0/saambe")));
        assert_eq!(saambe.interpreter, Some(PathBuf::from("python3")));
        assert!(saambe.script.is_none());
        assert_eq!(config.output.unwrap().keep_intermediate, Some(true));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("[saambe]\nbinary = \"x\"\n").is_err());
        assert!(FileConfig::from_toml("[placement]\n").is_err());
    }

    #[test]
    fn parse_errors_carry_the_file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nkeep-intermediate = \"yes\"\n").unwrap();
        match FileConfig::from_file(&path) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileConfig::from_file(&dir.path().join("absent.toml")),
            Err(CliError::Io(_))
        ));
    }
}
