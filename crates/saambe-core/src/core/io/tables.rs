use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A row of one of the tab-separated result tables.
pub trait TableRow: Serialize {
    const HEADER: &'static [&'static str];
}

/// Row of the table holding every predicted mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    #[serde(rename = "Mut")]
    pub mutation: String,
    pub ddg: f64,
    pub zscore: f64,
}

impl TableRow for ScoreRow {
    const HEADER: &'static [&'static str] = &["Mut", "ddg", "zscore"];
}

/// Row of the table restricted to the user's requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZScoreRow {
    #[serde(rename = "Mut")]
    pub mutation: String,
    pub zscore: f64,
}

impl TableRow for ZScoreRow {
    const HEADER: &'static [&'static str] = &["Mut", "zscore"];
}

/// Writes the header followed by every row; the header is written even without rows.
pub fn write_tsv<T: TableRow>(rows: &[T], writer: impl Write) -> Result<(), TableError> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    tsv.write_record(T::HEADER)?;
    for row in rows {
        tsv.serialize(row)?;
    }
    tsv.flush()?;
    Ok(())
}

pub fn write_tsv_to_path<T: TableRow, P: AsRef<Path>>(
    rows: &[T],
    path: P,
) -> Result<(), TableError> {
    write_tsv(rows, File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_tsv_emits_header_and_rows() {
        let rows = vec![
            ScoreRow {
                mutation: "CA182Y".to_string(),
                ddg: 1.5,
                zscore: -0.5,
            },
            ScoreRow {
                mutation: "CA182W".to_string(),
                ddg: 2.0,
                zscore: 0.5,
            },
        ];
        let mut buffer = Vec::new();
        write_tsv(&rows, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Mut\tddg\tzscore");
        assert_eq!(lines[1], "CA182Y\t1.5\t-0.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn write_tsv_keeps_header_for_empty_tables() {
        let mut buffer = Vec::new();
        write_tsv::<ZScoreRow>(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Mut\tzscore\n");
    }
}
