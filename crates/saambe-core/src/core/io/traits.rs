use crate::core::models::structure::Structure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for structure file formats the pipeline can consume.
///
/// Implementors provide two services: a residue-level index of the file and a
/// cleaned copy suitable as input for the ddG predictor.
pub trait StructureFile {
    /// The error type for I/O and parsing failures.
    type Error: Error + From<io::Error>;

    /// Reads the residue-level view of a structure from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error>;

    /// Copies the protein atoms of the first model from `reader` to `writer`,
    /// dropping waters, hetero groups and secondary alternate locations.
    ///
    /// # Return
    ///
    /// Returns the number of atom records written.
    ///
    /// # Errors
    ///
    /// Returns an error if no atom survives cleaning or I/O fails.
    fn clean_to(reader: &mut impl BufRead, writer: &mut impl Write)
    -> Result<usize, Self::Error>;

    /// Reads the residue-level view of a structure from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Structure, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a cleaned copy of the structure at `input` to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or cleaning fails.
    fn clean_to_path<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
    ) -> Result<usize, Self::Error> {
        let mut reader = BufReader::new(File::open(input)?);
        let mut writer = BufWriter::new(File::create(output)?);
        let written = Self::clean_to(&mut reader, &mut writer)?;
        writer.flush()?;
        Ok(written)
    }
}
