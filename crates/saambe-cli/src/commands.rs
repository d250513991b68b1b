pub mod compute;
pub mod expand;
pub mod normalize;
pub mod validate;

use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;

/// Reads a mutation list file as typed by the user.
fn read_mutation_list(path: &Path) -> Result<String> {
    info!("Reading mutation list from {:?}", path);
    std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
