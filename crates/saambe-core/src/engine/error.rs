use crate::core::io::pdb::PdbError;
use crate::core::io::tables::TableError;
use crate::engine::normalizer::NormalizeError;
use crate::engine::runner::RunnerError;
use crate::engine::zscore::ZScoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Problem with one line of the mutation list, keyed by the line as written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("{line}: mutation format must be chain/position/aaFrom/aaTo")]
    InvalidFormat { line: String },

    #[error("{line}: chain '{chain}' is not valid, valid chains are: {}", .valid_chains.join(", "))]
    UnknownChain {
        line: String,
        chain: String,
        valid_chains: Vec<String>,
    },

    #[error("{line}: position '{position}' is not a non-negative integer")]
    InvalidPosition { line: String, position: String },

    #[error("{line}: '{residue}' is not a valid amino acid code for aaFrom")]
    InvalidWildType { line: String, residue: String },

    #[error("{line}: '{residue}' is not a valid amino acid code for aaTo")]
    InvalidTarget { line: String, residue: String },

    #[error("{line}: position {position} does not exist in chain {chain} (first residue {first}, last residue {last})")]
    PositionOutOfRange {
        line: String,
        chain: String,
        position: isize,
        first: isize,
        last: isize,
    },

    #[error("{line}: residue at chain {chain} position {position} is {actual}, not {declared}")]
    WildTypeMismatch {
        line: String,
        chain: String,
        position: isize,
        declared: char,
        actual: String,
    },

    #[error("no mutations specified")]
    NoMutations,
}

/// Every problem found in a mutation list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", render_errors(.errors))]
pub struct ValidationReport {
    pub errors: Vec<MutationError>,
}

impl ValidationReport {
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

fn render_errors(errors: &[MutationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read structure '{path}': {source}", path = path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Structure '{}' contains no residues", .0.display())]
    EmptyStructure(PathBuf),

    #[error("Invalid mutation list:\n{0}")]
    Validation(#[from] ValidationReport),

    #[error("Predictor failed: {0}")]
    Predictor(#[from] RunnerError),

    #[error("Malformed predictor output: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Score normalization failed: {0}")]
    ZScore(#[from] ZScoreError),

    #[error("Failed to write table '{path}': {source}", path = path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("I/O error on '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
