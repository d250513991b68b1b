//! Lexical parsing of mutation lists.
//!
//! Two line grammars are accepted:
//!
//! - compact: a single token `<aaFrom><chain><position><aaTo>`, e.g. `CA182Y`. The
//!   wild-type is always exactly the first letter and the chain is the remaining run of
//!   letters before the position, so `CAB182Y` is chain `AB`.
//! - legacy: four tokens `<chain> <position> <aaFrom> <aaTo>`, e.g. `A 182 C Y`.
//!
//! An `X` target requests saturation mutagenesis. Nothing here checks residue codes or
//! the structure; that is the validator's job.

use crate::core::models::mutation::MutationToken;
use crate::engine::error::MutationError;

fn split_compact(token: &str) -> Option<(&str, &str, &str, &str)> {
    let wild_type = token.get(..1)?;
    if !wild_type.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let rest = &token[1..];

    let chain_end = rest.find(|c: char| !c.is_ascii_alphabetic())?;
    let (chain, rest) = rest.split_at(chain_end);
    if chain.is_empty() {
        return None;
    }

    let position_end = rest.find(|c: char| c.is_ascii_alphabetic())?;
    let (position, target) = rest.split_at(position_end);
    if !target.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some((wild_type, chain, position, target))
}

/// Splits one line into its four tokens, uppercasing residue letters.
pub fn parse_mutation_line(line: &str) -> Result<MutationToken, MutationError> {
    let original = line.trim();
    let normalized = original.to_ascii_uppercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let format_error = || MutationError::InvalidFormat {
        line: original.to_string(),
    };

    let (wild_type, chain, position, target) = match tokens.as_slice() {
        [compact] => split_compact(compact).ok_or_else(format_error)?,
        [chain, position, wild_type, target] => (*wild_type, *chain, *position, *target),
        _ => return Err(format_error()),
    };

    Ok(MutationToken {
        line: original.to_string(),
        wild_type: wild_type.to_string(),
        chain: chain.to_string(),
        position: position.to_string(),
        target: target.to_string(),
    })
}

/// Parses every non-blank line; malformed lines yield an error instead of being dropped.
pub fn parse_mutation_list(text: &str) -> Vec<Result<MutationToken, MutationError>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_mutation_line)
        .collect()
}
