//! # SAAMBE Core Library
//!
//! Prediction of binding free energy changes (ddG) for protein mutations through the
//! SAAMBE-3D predictor, with the input handling and post-processing around it.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** Amino acid and mutation models, the chain/residue index of a
//!   structure, and file I/O (PDB reading and cleaning, mutation files, score tables).
//!
//! - **[`engine`]: The Logic Core.** Parsing, validation and expansion of mutation lists,
//!   normalization of predictor output, z-score computation and the predictor runner.
//!
//! - **[`workflows`]: The Public API.** Ties the layers together into the complete ddG
//!   computation, from a structure and a mutation list to the final tables.

pub mod core;
pub mod engine;
pub mod workflows;
