use saambe::engine::config::DdgConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub structure_path: PathBuf,
    pub mutations_path: PathBuf,
    pub core_config: DdgConfig,
}
