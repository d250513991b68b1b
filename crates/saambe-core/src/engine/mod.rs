//! # Engine Module
//!
//! The mutation-handling logic between raw user input and the score tables.
//!
//! - **Parsing** ([`parser`]) - Compact (`CA182Y`) and legacy (`A 182 C Y`) mutation notations
//! - **Validation** ([`validator`]) - Checks each mutation against the chains and residues of the structure
//! - **Expansion** ([`expander`]) - Turns saturation requests into one substitution per standard residue, identity included
//! - **Normalization** ([`normalizer`]) - Reads the raw predictor output into keyed ddG rows
//! - **Scoring** ([`zscore`]) - Population z-scores over every evaluated mutation
//! - **Running** ([`runner`]) - Launches the external SAAMBE-3D predictor
//!
//! Configuration, progress reporting and the shared error types live in [`config`],
//! [`progress`] and [`error`].

pub mod config;
pub mod error;
pub mod expander;
pub mod normalizer;
pub mod parser;
pub mod progress;
pub mod runner;
pub mod validator;
pub mod zscore;
