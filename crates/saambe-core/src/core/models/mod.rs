//! # Core Models Module
//!
//! Value types shared by every stage of the ddG pipeline.
//!
//! - [`residue`] - The twenty standard amino acids and their one/three-letter codes
//! - [`structure`] - Residue-level view of a structure file ([`structure::ChainResidueMap`])
//! - [`mutation`] - Mutation tokens, validated records, expanded substitutions and join keys
//!
//! All of these are constructed fresh for each run and never shared between runs.

pub mod mutation;
pub mod residue;
pub mod structure;
