use crate::core::models::mutation::ExpandedMutation;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one `<chain> <position> <aaFrom> <aaTo>` line per mutation.
pub fn write_mutation_file(
    mutations: &[ExpandedMutation],
    writer: &mut impl Write,
) -> io::Result<()> {
    for mutation in mutations {
        writeln!(writer, "{}", mutation.mutation_file_line())?;
    }
    Ok(())
}

pub fn write_mutation_file_to_path<P: AsRef<Path>>(
    mutations: &[ExpandedMutation],
    path: P,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_mutation_file(mutations, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::AminoAcid;
    use tempfile::tempdir;

    fn mutations() -> Vec<ExpandedMutation> {
        vec![
            ExpandedMutation {
                chain: "A".to_string(),
                position: 182,
                wild_type: AminoAcid::Cysteine,
                target: AminoAcid::Tyrosine,
            },
            ExpandedMutation {
                chain: "B".to_string(),
                position: 7,
                wild_type: AminoAcid::Glycine,
                target: AminoAcid::Alanine,
            },
        ]
    }

    #[test]
    fn writes_one_line_per_mutation() {
        let mut buffer = Vec::new();
        write_mutation_file(&mutations(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "A 182 C Y\nB 7 G A\n");
    }

    #[test]
    fn writes_to_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mutations.txt");
        write_mutation_file_to_path(&mutations(), &path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
