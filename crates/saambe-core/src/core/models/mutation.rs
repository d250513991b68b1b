use super::residue::AminoAcid;
use crate::core::utils::identifiers::SATURATION_CODE;
use std::fmt;

/// Lexical split of one mutation line, before any structural check.
///
/// Residue tokens are already uppercased; the position is kept as written so the
/// validator can report non-numeric values verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationToken {
    pub line: String,
    pub wild_type: String,
    pub chain: String,
    pub position: String,
    pub target: String,
}

impl MutationToken {
    pub fn is_saturation(&self) -> bool {
        self.target.len() == 1 && self.target.starts_with(SATURATION_CODE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetResidue {
    Residue(AminoAcid),
    /// Every standard residue at this position.
    Saturation,
}

impl fmt::Display for TargetResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetResidue::Residue(aa) => write!(f, "{}", aa),
            TargetResidue::Saturation => write!(f, "{}", SATURATION_CODE),
        }
    }
}

/// A validated mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub chain: String,
    pub position: isize,
    pub wild_type: AminoAcid,
    pub target: TargetResidue,
}

impl MutationRecord {
    pub fn request(&self) -> MutationRequest {
        let prefix = format!("{}{}{}", self.wild_type, self.chain, self.position);
        match self.target {
            TargetResidue::Residue(aa) => MutationRequest::Concrete(format!("{}{}", prefix, aa)),
            TargetResidue::Saturation => MutationRequest::Saturation { prefix },
        }
    }
}

/// A single-residue substitution with a concrete target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandedMutation {
    pub chain: String,
    pub position: isize,
    pub wild_type: AminoAcid,
    pub target: AminoAcid,
}

impl ExpandedMutation {
    pub fn key(&self) -> MutationKey {
        MutationKey::new(self.wild_type, &self.chain, self.position, self.target)
    }

    /// Line of the predictor's mutation file: `<chain> <position> <aaFrom> <aaTo>`.
    pub fn mutation_file_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.chain.to_ascii_uppercase(),
            self.position,
            self.wild_type,
            self.target
        )
    }
}

/// Join key between predicted values and user requests, e.g. `CA182Y`.
///
/// Assembled from the predictor's output columns in the order
/// residue-from, chain, position, residue-to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutationKey(String);

impl MutationKey {
    pub fn new(
        from: impl fmt::Display,
        chain: &str,
        position: impl fmt::Display,
        to: impl fmt::Display,
    ) -> Self {
        Self(format!("{}{}{}{}", from, chain, position, to))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MutationKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for MutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A mutation as originally requested by the user, in compact notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRequest {
    Concrete(String),
    Saturation { prefix: String },
}

impl MutationRequest {
    /// Concrete requests match by equality; saturation requests match any key made of
    /// their prefix followed by exactly one residue letter.
    pub fn matches(&self, key: &MutationKey) -> bool {
        match self {
            MutationRequest::Concrete(request) => request == key.as_str(),
            MutationRequest::Saturation { prefix } => key
                .as_str()
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| {
                    let mut chars = rest.chars();
                    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
                }),
        }
    }
}

impl fmt::Display for MutationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationRequest::Concrete(request) => f.write_str(request),
            MutationRequest::Saturation { prefix } => write!(f, "{}{}", prefix, SATURATION_CODE),
        }
    }
}
