use crate::core::models::mutation::{ExpandedMutation, MutationKey, MutationRecord, TargetResidue};
use crate::core::models::residue::AminoAcid;
use std::collections::HashSet;
use tracing::debug;

/// Expands one record without deduplication.
///
/// A saturation request yields one substitution per standard residue in canonical
/// order, including the identity substitution.
pub fn expand_record(record: &MutationRecord) -> Vec<ExpandedMutation> {
    let substitute = |target: AminoAcid| ExpandedMutation {
        chain: record.chain.clone(),
        position: record.position,
        wild_type: record.wild_type,
        target,
    };
    match record.target {
        TargetResidue::Residue(target) => vec![substitute(target)],
        TargetResidue::Saturation => AminoAcid::ALL.into_iter().map(substitute).collect(),
    }
}

/// Expands a batch in input order; a key produced earlier anywhere in the batch is skipped.
pub fn expand_mutations(records: &[MutationRecord]) -> Vec<ExpandedMutation> {
    let mut seen: HashSet<MutationKey> = HashSet::new();
    let mut expanded = Vec::new();
    for record in records {
        for mutation in expand_record(record) {
            if seen.insert(mutation.key()) {
                expanded.push(mutation);
            } else {
                debug!("Skipping duplicate mutation {}", mutation.key());
            }
        }
    }
    expanded
}
