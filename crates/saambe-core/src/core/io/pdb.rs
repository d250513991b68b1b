use crate::core::io::traits::StructureFile;
use crate::core::models::structure::Structure;
use crate::core::utils::identifiers::is_water_residue;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const MIN_ATOM_RECORD_LEN: usize = 27;
const DEFAULT_MODEL_ID: u32 = 1;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 27 chars)")]
    LineTooShort,
    #[error("ATOM/HETATM record contains non-ASCII characters")]
    NonAscii,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn record_type(line: &str) -> &str {
    slice_and_trim(line, 0, 6)
}

fn is_atom_record(record: &str) -> bool {
    matches!(record, "ATOM" | "HETATM")
}

/// Alternate location indicator; blank and `A` are the primary conformer.
fn is_primary_altloc(line: &str) -> bool {
    matches!(line.get(16..17), None | Some(" ") | Some("A"))
}

#[derive(Debug, PartialEq, Eq)]
struct ResidueFields<'a> {
    name: &'a str,
    chain_id: &'a str,
    res_seq: isize,
    i_code: &'a str,
}

fn parse_residue_fields(line: &str, line_num: usize) -> Result<ResidueFields<'_>, PdbError> {
    // Columns are byte offsets.
    if !line.is_ascii() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::NonAscii,
        });
    }
    if line.len() < MIN_ATOM_RECORD_LEN {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }
    let name = slice_and_trim(line, 17, 20);
    if name.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "18-20".into(),
            },
        });
    }
    let res_seq_str = slice_and_trim(line, 22, 26);
    let res_seq = res_seq_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "23-26".into(),
            value: res_seq_str.into(),
        },
    })?;
    Ok(ResidueFields {
        name,
        chain_id: slice_and_trim(line, 21, 22),
        res_seq,
        i_code: slice_and_trim(line, 26, 27),
    })
}

fn parse_model_id(line: &str, line_num: usize) -> Result<u32, PdbError> {
    let value = slice_and_trim(line, 6, 14);
    if value.is_empty() {
        return Ok(DEFAULT_MODEL_ID);
    }
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "11-14".into(),
            value: value.into(),
        },
    })
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut structure = Structure::new();
        let mut current_model = DEFAULT_MODEL_ID;
        let mut last_residue: HashMap<String, (isize, String, String)> = HashMap::new();
        let mut atom_count = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match record_type(&line) {
                "MODEL" => {
                    current_model = parse_model_id(&line, line_num)?;
                    last_residue.clear();
                }
                "ENDMDL" => last_residue.clear(),
                "END" => break,
                record if is_atom_record(record) => {
                    let fields = parse_residue_fields(&line, line_num)?;
                    atom_count += 1;
                    if is_water_residue(fields.name) {
                        continue;
                    }
                    let identity = (
                        fields.res_seq,
                        fields.i_code.to_string(),
                        fields.name.to_string(),
                    );
                    if last_residue.get(fields.chain_id) == Some(&identity) {
                        continue;
                    }
                    structure.model_mut(current_model).push_residue(
                        fields.chain_id,
                        fields.res_seq,
                        fields.name,
                    );
                    last_residue.insert(fields.chain_id.to_string(), identity);
                }
                _ => {}
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(structure)
    }

    fn clean_to(
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> Result<usize, Self::Error> {
        let mut written = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match record_type(&line) {
                "ENDMDL" | "END" => break,
                "ATOM" => {
                    let fields = parse_residue_fields(&line, line_num)?;
                    if is_water_residue(fields.name) || !is_primary_altloc(&line) {
                        continue;
                    }
                    match (line.get(..16), line.get(17..)) {
                        (Some(head), Some(tail)) => writeln!(writer, "{} {}", head, tail)?,
                        _ => writeln!(writer, "{}", line)?,
                    }
                    written += 1;
                }
                "TER" => writeln!(writer, "{}", line.trim_end())?,
                _ => {}
            }
        }

        if written == 0 {
            return Err(PdbError::MissingRecord("protein ATOM records".into()));
        }
        writeln!(writer, "END")?;
        Ok(written)
    }
}
