use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueSite {
    pub position: isize, // Residue sequence number from source file
    pub name: String,    // Three-letter residue name (e.g., "CYS")
}

/// Per-chain residue index of one model, waters excluded.
///
/// Residues are kept in file order; the first and last entries of a chain are
/// what error messages report as its valid range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainResidueMap {
    chains: BTreeMap<String, Vec<ResidueSite>>,
}

impl ChainResidueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_residue(&mut self, chain_id: &str, position: isize, name: &str) {
        self.chains
            .entry(chain_id.to_string())
            .or_default()
            .push(ResidueSite {
                position,
                name: name.trim().to_string(),
            });
    }

    pub fn contains_chain(&self, chain_id: &str) -> bool {
        self.chains.contains_key(chain_id)
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    pub fn residues(&self, chain_id: &str) -> Option<&[ResidueSite]> {
        self.chains.get(chain_id).map(Vec::as_slice)
    }

    pub fn residue_at(&self, chain_id: &str, position: isize) -> Option<&ResidueSite> {
        self.residues(chain_id)?
            .iter()
            .find(|site| site.position == position)
    }

    /// First and last observed positions of a chain, in file order.
    pub fn position_range(&self, chain_id: &str) -> Option<(isize, isize)> {
        let residues = self.residues(chain_id)?;
        Some((residues.first()?.position, residues.last()?.position))
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, isize, &'a str)> for ChainResidueMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, isize, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (chain_id, position, name) in iter {
            map.push_residue(chain_id, position, name);
        }
        map
    }
}

/// Residue-level view of a structure file, one [`ChainResidueMap`] per model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    models: BTreeMap<u32, ChainResidueMap>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn model_mut(&mut self, model_id: u32) -> &mut ChainResidueMap {
        self.models.entry(model_id).or_default()
    }

    pub fn models(&self) -> &BTreeMap<u32, ChainResidueMap> {
        &self.models
    }

    /// The residue index of the first model, which is what mutations are checked against.
    pub fn chain_residue_map(&self) -> Option<&ChainResidueMap> {
        self.models.values().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> ChainResidueMap {
        [
            ("A", 180, "GLY"),
            ("A", 182, "CYS"),
            ("A", 181, "SER"),
            ("B", 5, "TRP"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn residues_keep_file_order() {
        let map = sample_map();
        let positions: Vec<_> = map.residues("A").unwrap().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![180, 182, 181]);
    }

    #[test]
    fn position_range_reports_first_and_last_in_file_order() {
        let map = sample_map();
        assert_eq!(map.position_range("A"), Some((180, 181)));
        assert_eq!(map.position_range("B"), Some((5, 5)));
        assert_eq!(map.position_range("Z"), None);
    }

    #[test]
    fn residue_at_finds_residue_by_position() {
        let map = sample_map();
        assert_eq!(map.residue_at("A", 182).unwrap().name, "CYS");
        assert!(map.residue_at("A", 999).is_none());
        assert!(map.residue_at("C", 182).is_none());
    }

    #[test]
    fn chain_ids_lists_every_chain() {
        let map = sample_map();
        let mut chains: Vec<_> = map.chain_ids().collect();
        chains.sort_unstable();
        assert_eq!(chains, vec!["A", "B"]);
        assert_eq!(map.chain_count(), 2);
    }

    #[test]
    fn structure_exposes_first_model_as_chain_residue_map() {
        let mut structure = Structure::new();
        structure.model_mut(2).push_residue("B", 1, "ALA");
        structure.model_mut(1).push_residue("A", 1, "GLY");
        let first = structure.chain_residue_map().unwrap();
        assert!(first.contains_chain("A"));
        assert!(!first.contains_chain("B"));
        assert_eq!(structure.models().len(), 2);
    }
}
