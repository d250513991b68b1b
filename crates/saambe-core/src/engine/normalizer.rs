//! Post-processing of the predictor's raw output.
//!
//! The raw output is a block of `#` comment lines, one column-header row, and
//! whitespace-delimited data rows with a fixed layout (see [`columns`]). Rows are parsed
//! through [`DdgRow::parse`] only; any drift in the layout fails the whole run.

use crate::core::models::mutation::MutationKey;
use thiserror::Error;

/// Column layout of a raw data row.
pub mod columns {
    pub const STRUCTURE: usize = 0;
    pub const CHAIN: usize = 1;
    pub const POSITION: usize = 2;
    pub const RESIDUE_FROM: usize = 3;
    pub const RESIDUE_TO: usize = 4;
    pub const DDG: usize = 5;
    pub const COUNT: usize = 6;
}

const COMMENT_PREFIX: char = '#';

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: ddG value '{value}' is not a number")]
    InvalidValue { line: usize, value: String },
}

/// One data row of the predictor output.
#[derive(Debug, Clone, PartialEq)]
pub struct DdgRow {
    pub structure: String,
    pub chain: String,
    pub position: String,
    pub residue_from: String,
    pub residue_to: String,
    pub ddg: f64,
}

impl DdgRow {
    pub fn parse(line: &str, line_num: usize) -> Result<Self, NormalizeError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != columns::COUNT {
            return Err(NormalizeError::ColumnCount {
                line: line_num,
                expected: columns::COUNT,
                found: fields.len(),
            });
        }
        let raw_ddg = fields[columns::DDG];
        let ddg = raw_ddg
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| NormalizeError::InvalidValue {
                line: line_num,
                value: raw_ddg.to_string(),
            })?;
        Ok(Self {
            structure: fields[columns::STRUCTURE].to_string(),
            chain: fields[columns::CHAIN].to_string(),
            position: fields[columns::POSITION].to_string(),
            residue_from: fields[columns::RESIDUE_FROM].to_string(),
            residue_to: fields[columns::RESIDUE_TO].to_string(),
            ddg,
        })
    }

    pub fn key(&self) -> MutationKey {
        MutationKey::new(
            &self.residue_from,
            &self.chain,
            &self.position,
            &self.residue_to,
        )
    }
}

/// Parses the data rows of a raw output, skipping comments, blank lines and the header row.
pub fn parse_raw_output(raw: &str) -> Result<Vec<DdgRow>, NormalizeError> {
    raw.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .skip(1)
        .map(|(line_num, line)| DdgRow::parse(line, line_num))
        .collect()
}

/// Reformats a raw output into `key\tvalue` lines, without a trailing newline.
pub fn normalize(raw: &str) -> Result<String, NormalizeError> {
    let rows = parse_raw_output(raw)?;
    Ok(rows
        .iter()
        .map(|row| format!("{}\t{}", row.key(), row.ddg))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "\
# SAAMBE-3D prediction
# structure: atomicStructure.pdb

PDB Chain Position Wild Mutant ddG
atomicStructure.pdb A 182 C Y 1.25
atomicStructure.pdb A 182 C W -0.5
";

    #[test]
    fn normalize_emits_key_value_lines() {
        assert_eq!(normalize(RAW).unwrap(), "CA182Y\t1.25\nCA182W\t-0.5");
    }

    #[test]
    fn parse_raw_output_drops_comments_and_header() {
        let rows = parse_raw_output(RAW).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].chain, "A");
        assert_eq!(rows[0].position, "182");
        assert_eq!(rows[1].ddg, -0.5);
        assert_eq!(rows[1].key().as_str(), "CA182W");
    }

    #[test]
    fn header_only_output_has_no_rows() {
        assert_eq!(normalize("# c\nPDB Chain Position Wild Mutant ddG\n").unwrap(), "");
        assert!(parse_raw_output("").unwrap().is_empty());
    }

    #[test]
    fn wrong_column_count_is_fatal() {
        let raw = format!("{RAW}atomicStructure.pdb A 183 G\n");
        assert_eq!(
            normalize(&raw),
            Err(NormalizeError::ColumnCount {
                line: 7,
                expected: 6,
                found: 4
            })
        );
    }

    #[test]
    fn non_numeric_value_is_fatal() {
        let raw = format!("{RAW}atomicStructure.pdb A 183 G A n/a\n");
        assert!(matches!(
            parse_raw_output(&raw),
            Err(NormalizeError::InvalidValue { line: 7, .. })
        ));
    }
}
