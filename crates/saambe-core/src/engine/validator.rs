use crate::core::models::mutation::{
    MutationRecord, MutationRequest, MutationToken, TargetResidue,
};
use crate::core::models::residue::AminoAcid;
use crate::core::models::structure::ChainResidueMap;
use crate::core::utils::identifiers::{SATURATION_CODE, three_to_one};
use crate::engine::error::{MutationError, ValidationReport};
use crate::engine::parser;
use tracing::debug;

fn single_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_position(token: &str) -> Option<isize> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Checks one parsed line against the structure, stopping at the first failure.
///
/// Order: chain, position syntax, wild-type code, target code, position presence,
/// wild-type identity.
pub fn validate_token(
    residues: &ChainResidueMap,
    token: &MutationToken,
) -> Result<MutationRecord, MutationError> {
    let line = || token.line.clone();

    if !residues.contains_chain(&token.chain) {
        return Err(MutationError::UnknownChain {
            line: line(),
            chain: token.chain.clone(),
            valid_chains: residues.chain_ids().map(str::to_string).collect(),
        });
    }

    let position = parse_position(&token.position).ok_or_else(|| MutationError::InvalidPosition {
        line: line(),
        position: token.position.clone(),
    })?;

    let wild_type = single_letter(&token.wild_type)
        .and_then(AminoAcid::from_one_letter)
        .ok_or_else(|| MutationError::InvalidWildType {
            line: line(),
            residue: token.wild_type.clone(),
        })?;

    let target = match single_letter(&token.target) {
        Some(SATURATION_CODE) => Some(TargetResidue::Saturation),
        Some(c) => AminoAcid::from_one_letter(c).map(TargetResidue::Residue),
        None => None,
    }
    .ok_or_else(|| MutationError::InvalidTarget {
        line: line(),
        residue: token.target.clone(),
    })?;

    let Some(site) = residues.residue_at(&token.chain, position) else {
        let (first, last) = residues.position_range(&token.chain).unwrap_or((0, 0));
        return Err(MutationError::PositionOutOfRange {
            line: line(),
            chain: token.chain.clone(),
            position,
            first,
            last,
        });
    };

    if three_to_one(&site.name) != Some(wild_type.one_letter()) {
        let actual = match three_to_one(&site.name) {
            Some(code) => format!("{} ({})", site.name, code),
            None => site.name.clone(),
        };
        return Err(MutationError::WildTypeMismatch {
            line: line(),
            chain: token.chain.clone(),
            position,
            declared: wild_type.one_letter(),
            actual,
        });
    }

    Ok(MutationRecord {
        chain: token.chain.clone(),
        position,
        wild_type,
        target,
    })
}

/// The request a token names, without consulting a structure.
///
/// The position follows the same rule as [`validate_token`] and is rendered as an
/// integer, so `CA0182Y` and `CA182Y` name the same request.
pub fn token_request(token: &MutationToken) -> Result<MutationRequest, MutationError> {
    let position = parse_position(&token.position).ok_or_else(|| MutationError::InvalidPosition {
        line: token.line.clone(),
        position: token.position.clone(),
    })?;
    let prefix = format!("{}{}{}", token.wild_type, token.chain, position);
    Ok(if token.is_saturation() {
        MutationRequest::Saturation { prefix }
    } else {
        MutationRequest::Concrete(format!("{}{}", prefix, token.target))
    })
}

/// Parses and validates a whole mutation list, collecting every error.
///
/// An empty list is reported once as [`MutationError::NoMutations`].
pub fn validate_mutation_list(
    residues: &ChainResidueMap,
    text: &str,
) -> Result<Vec<MutationRecord>, ValidationReport> {
    let parsed = parser::parse_mutation_list(text);
    let mut records = Vec::with_capacity(parsed.len());
    let mut errors = Vec::new();

    if parsed.is_empty() {
        errors.push(MutationError::NoMutations);
    }

    for result in parsed {
        match result.and_then(|token| validate_token(residues, &token)) {
            Ok(record) => records.push(record),
            Err(err) => {
                debug!("Rejected mutation: {}", err);
                errors.push(err);
            }
        }
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(ValidationReport { errors })
    }
}
