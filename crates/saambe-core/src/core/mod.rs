//! # Core Module
//!
//! Stateless building blocks of the ddG pipeline: residue code tables, the value
//! types that flow between stages, and file I/O.
//!
//! - **Data Models** ([`models`]) - Amino acids, chain/residue index, mutation records
//! - **File I/O** ([`io`]) - PDB reading and cleaning, mutation file, result tables
//! - **Identifiers** ([`utils`]) - Static residue code tables

pub mod io;
pub mod models;
pub mod utils;
