use crate::core::utils::identifiers;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,       // A (ALA)
    Cysteine,      // C (CYS)
    AsparticAcid,  // D (ASP)
    GlutamicAcid,  // E (GLU)
    Phenylalanine, // F (PHE)
    Glycine,       // G (GLY)
    Histidine,     // H (HIS)
    Isoleucine,    // I (ILE)
    Lysine,        // K (LYS)
    Leucine,       // L (LEU)
    Methionine,    // M (MET)
    Asparagine,    // N (ASN)
    Proline,       // P (PRO)
    Glutamine,     // Q (GLN)
    Arginine,      // R (ARG)
    Serine,        // S (SER)
    Threonine,     // T (THR)
    Valine,        // V (VAL)
    Tryptophan,    // W (TRP)
    Tyrosine,      // Y (TYR)
}

impl AminoAcid {
    /// The standard residues in canonical one-letter order (`ACDEFGHIKLMNPQRSTVWY`).
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Proline,
        AminoAcid::Glutamine,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
    ];

    pub fn one_letter(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Cysteine => 'C',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Lysine => 'K',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Proline => 'P',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Arginine => 'R',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Valine => 'V',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
        }
    }

    pub fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::GlutamicAcid => "GLU",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Lysine => "LYS",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Methionine => "MET",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::Proline => "PRO",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Valine => "VAL",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
        }
    }

    /// Case-insensitive lookup of a one-letter code. `X` is not a residue.
    pub fn from_one_letter(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        Self::ALL.into_iter().find(|aa| aa.one_letter() == code)
    }

    pub fn from_three_letter(name: &str) -> Option<Self> {
        identifiers::three_to_one(name).and_then(Self::from_one_letter)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a standard amino acid code")]
pub struct ParseAminoAcidError(pub String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    /// Accepts either a one-letter or a three-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_one_letter(c),
            _ => Self::from_three_letter(trimmed),
        };
        parsed.ok_or_else(|| ParseAminoAcidError(s.to_string()))
    }
}
