//! # Workflows Module
//!
//! High-level entry points that run a complete computation end to end.
//!
//! - **ddG Workflow** ([`ddg`]) - Validates a mutation list against a structure, runs the
//!   SAAMBE-3D predictor and writes the normalized score tables.

pub mod ddg;
