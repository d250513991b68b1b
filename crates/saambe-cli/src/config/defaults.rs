use directories::ProjectDirs;
use std::path::PathBuf;

const SAAMBE_VERSION: &str = "1.0";

pub struct DefaultsConfig {
    pub interpreter: PathBuf,
    pub script: PathBuf,
    pub saambe_home: Option<PathBuf>,
    pub keep_intermediate: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python"),
            script: PathBuf::from("saambe-3d.py"),
            saambe_home: default_saambe_home(),
            keep_intermediate: false,
        }
    }
}

/// `<data dir>/saambe-<version>/saambe`, the layout produced by the plugin installer.
fn default_saambe_home() -> Option<PathBuf> {
    ProjectDirs::from("org", "scipion-chem", "saambe").map(|dirs| {
        dirs.data_dir()
            .join(format!("saambe-{}", SAAMBE_VERSION))
            .join("saambe")
    })
}
