use phf::{Map, Set, phf_map, phf_set};

/// Canonical one-letter order used for saturation mutagenesis.
pub const STANDARD_ONE_LETTER_CODES: &str = "ACDEFGHIKLMNPQRSTVWY";

/// One-letter marker requesting every standard residue at a position.
pub const SATURATION_CODE: char = 'X';

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "CYS" => 'C', "ASP" => 'D', "GLU" => 'E', "PHE" => 'F',
    "GLY" => 'G', "HIS" => 'H', "ILE" => 'I', "LYS" => 'K', "LEU" => 'L',
    "MET" => 'M', "ASN" => 'N', "PRO" => 'P', "GLN" => 'Q', "ARG" => 'R',
    "SER" => 'S', "THR" => 'T', "VAL" => 'V', "TRP" => 'W', "TYR" => 'Y',
};

static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "DOD", "H2O", "TIP", "TIP3", "SOL",
};

pub fn three_to_one(residue_name: &str) -> Option<char> {
    THREE_TO_ONE
        .get(residue_name.trim().to_ascii_uppercase().as_str())
        .copied()
}

pub fn is_standard_one_letter(code: char) -> bool {
    STANDARD_ONE_LETTER_CODES.contains(code.to_ascii_uppercase())
}

pub fn is_water_residue(residue_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(residue_name.trim().to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_to_one_maps_all_standard_residues() {
        let mapped: String = [
            "ALA", "CYS", "ASP", "GLU", "PHE", "GLY", "HIS", "ILE", "LYS", "LEU", "MET", "ASN",
            "PRO", "GLN", "ARG", "SER", "THR", "VAL", "TRP", "TYR",
        ]
        .iter()
        .map(|name| three_to_one(name).unwrap())
        .collect();
        assert_eq!(mapped, STANDARD_ONE_LETTER_CODES);
    }

    #[test]
    fn three_to_one_trims_and_ignores_case() {
        assert_eq!(three_to_one(" cys "), Some('C'));
        assert_eq!(three_to_one("Trp"), Some('W'));
    }

    #[test]
    fn three_to_one_rejects_non_standard_residues() {
        assert_eq!(three_to_one("MSE"), None);
        assert_eq!(three_to_one("ALL"), None);
        assert_eq!(three_to_one(""), None);
    }

    #[test]
    fn saturation_code_is_not_a_standard_residue() {
        assert!(!is_standard_one_letter(SATURATION_CODE));
        assert!(is_standard_one_letter('y'));
        assert!(!is_standard_one_letter('B'));
    }

    #[test]
    fn is_water_residue_recognizes_common_solvent_names() {
        assert!(is_water_residue("HOH"));
        assert!(is_water_residue(" wat"));
        assert!(!is_water_residue("GLY"));
    }
}
