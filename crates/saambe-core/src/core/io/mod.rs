//! Provides input/output functionality for the files a ddG run touches.
//!
//! Structure files are read through the [`traits::StructureFile`] interface (PDB is the
//! supported format). The predictor's mutation file and the tab-separated result tables
//! have small dedicated writers.

pub mod mutation_file;
pub mod pdb;
pub mod tables;
pub mod traits;
