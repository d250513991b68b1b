use crate::core::io::tables::{ScoreRow, ZScoreRow};
use crate::core::models::mutation::{MutationKey, MutationRequest};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ZScoreError {
    #[error("no predicted values to normalize")]
    Empty,
    #[error("standard deviation is zero: all {count} values equal {mean}")]
    Degenerate { count: usize, mean: f64 },
    #[error("line {line}: expected '<mutation>\\t<ddg>', found '{content}'")]
    MalformedLine { line: usize, content: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    /// Population standard deviation (ddof = 0).
    pub std_dev: f64,
}

/// Mean and population standard deviation; a zero spread is an error, never ±inf.
///
/// Identical values are degenerate even when rounding in the mean leaves a
/// non-zero residual deviation.
pub fn population_statistics(values: &[f64]) -> Result<Statistics, ZScoreError> {
    let Some(&first) = values.first() else {
        return Err(ZScoreError::Empty);
    };
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    let all_identical = values.iter().all(|v| *v == first);
    if all_identical || std_dev == 0.0 || !std_dev.is_finite() {
        return Err(ZScoreError::Degenerate {
            count: values.len(),
            mean,
        });
    }
    Ok(Statistics { mean, std_dev })
}

/// Mutation → ddG table in first-seen order; re-inserting a key overwrites its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(MutationKey, f64)>,
    index: HashMap<MutationKey, usize>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: MutationKey, value: f64) {
        match self.index.get(&key) {
            Some(&idx) => {
                debug!("Duplicate prediction for {}, keeping the last value", key);
                self.entries[idx].1 = value;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Parses the normalizer's `key\tvalue` text.
    pub fn parse(normalized: &str) -> Result<Self, ZScoreError> {
        let mut table = Self::new();
        for (idx, line) in normalized.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || ZScoreError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            };
            let (key, value) = line.split_once('\t').ok_or_else(malformed)?;
            let value: f64 = value.trim().parse().map_err(|_| malformed())?;
            table.insert(MutationKey::from(key.trim()), value);
        }
        Ok(table)
    }

    pub fn get(&self, key: &MutationKey) -> Option<f64> {
        self.index.get(key).map(|&idx| self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn score(&self) -> Result<ScoreReport, ZScoreError> {
        let values: Vec<f64> = self.entries.iter().map(|(_, v)| *v).collect();
        let statistics = population_statistics(&values)?;
        let scores = self
            .entries
            .iter()
            .map(|(key, ddg)| ScoredMutation {
                key: key.clone(),
                ddg: *ddg,
                zscore: (ddg - statistics.mean) / statistics.std_dev,
            })
            .collect();
        Ok(ScoreReport { statistics, scores })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMutation {
    pub key: MutationKey,
    pub ddg: f64,
    pub zscore: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub statistics: Statistics,
    pub scores: Vec<ScoredMutation>,
}

impl ScoreReport {
    pub fn all_rows(&self) -> Vec<ScoreRow> {
        self.scores
            .iter()
            .map(|s| ScoreRow {
                mutation: s.key.to_string(),
                ddg: s.ddg,
                zscore: s.zscore,
            })
            .collect()
    }

    /// Scores matching each request, in request order. A score matching several
    /// requests is listed once per request.
    pub fn user_rows(&self, requests: &[MutationRequest]) -> Vec<ZScoreRow> {
        let scores = &self.scores;
        requests
            .iter()
            .flat_map(move |request| {
                scores
                    .iter()
                    .filter(move |s| request.matches(&s.key))
                    .map(|s| ZScoreRow {
                        mutation: s.key.to_string(),
                        zscore: s.zscore,
                    })
            })
            .collect()
    }

    /// Lowest and highest predicted ddG.
    pub fn extremes(&self) -> Option<(&ScoredMutation, &ScoredMutation)> {
        let by_ddg = |a: &&ScoredMutation, b: &&ScoredMutation| a.ddg.total_cmp(&b.ddg);
        Some((
            self.scores.iter().min_by(by_ddg)?,
            self.scores.iter().max_by(by_ddg)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-4;

    fn key(s: &str) -> MutationKey {
        MutationKey::from(s)
    }

    #[test]
    fn statistics_use_population_deviation() {
        let stats = population_statistics(&[1.0, 2.0, 3.0]).unwrap();
        assert!((stats.mean - 2.0).abs() < TOL);
        assert!((stats.std_dev - 0.8165).abs() < TOL);
    }

    #[test]
    fn identical_values_are_degenerate() {
        assert_eq!(
            population_statistics(&[5.0, 5.0]),
            Err(ZScoreError::Degenerate {
                count: 2,
                mean: 5.0
            })
        );
    }

    #[test]
    fn identical_values_with_inexact_mean_are_degenerate() {
        for value in [0.1, 2.7] {
            assert!(
                matches!(
                    population_statistics(&[value; 3]),
                    Err(ZScoreError::Degenerate { count: 3, .. })
                ),
                "{value}"
            );
        }
        let table = ScoreTable::parse("CA182A\t0.1\nCA182D\t0.1\nCA182E\t0.1").unwrap();
        assert!(matches!(table.score(), Err(ZScoreError::Degenerate { .. })));
    }

    #[test]
    fn single_value_is_degenerate() {
        assert!(matches!(
            population_statistics(&[1.0]),
            Err(ZScoreError::Degenerate { .. })
        ));
    }

    #[test]
    fn normalized_output_feeds_user_rows() {
        let raw = "\
# SAAMBE-3D
PDB Chain Position Wild Mutant ddG
complex A 182 C Y 1.0
complex A 182 C W 3.0
complex B 5 W A 2.0
";
        let normalized = crate::engine::normalizer::normalize(raw).unwrap();
        let report = ScoreTable::parse(&normalized).unwrap().score().unwrap();
        let rows = report.user_rows(&[
            MutationRequest::Concrete("WB5A".to_string()),
            MutationRequest::Saturation {
                prefix: "CA182".to_string(),
            },
        ]);
        let keys: Vec<&str> = rows.iter().map(|r| r.mutation.as_str()).collect();
        assert_eq!(keys, ["WB5A", "CA182Y", "CA182W"]);
        assert!(rows[0].zscore.abs() < TOL);
        assert!((rows[2].zscore - 1.2247).abs() < TOL);
    }

    #[test]
    fn empty_values_are_rejected() {
        assert_eq!(population_statistics(&[]), Err(ZScoreError::Empty));
        assert_eq!(ScoreTable::new().score(), Err(ZScoreError::Empty));
    }

    #[test]
    fn score_computes_z_scores_in_table_order() {
        let table = ScoreTable::parse("CA182A\t1.0\nCA182D\t2.0\nCA182E\t3.0").unwrap();
        let report = table.score().unwrap();
        let z: Vec<f64> = report.scores.iter().map(|s| s.zscore).collect();
        assert!((z[0] + 1.2247).abs() < TOL);
        assert!(z[1].abs() < TOL);
        assert!((z[2] - 1.2247).abs() < TOL);
        assert_eq!(report.scores[0].key, key("CA182A"));
    }

    #[test]
    fn duplicate_keys_keep_last_value_at_first_position() {
        let table = ScoreTable::parse("CA182Y\t1.0\nCA182W\t2.0\nCA182Y\t4.0\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&key("CA182Y")), Some(4.0));
        let report = table.score().unwrap();
        assert_eq!(report.scores[0].key, key("CA182Y"));
    }

    #[test]
    fn malformed_lines_are_reported() {
        assert_eq!(
            ScoreTable::parse("CA182Y 1.0"),
            Err(ZScoreError::MalformedLine {
                line: 1,
                content: "CA182Y 1.0".to_string()
            })
        );
        assert!(matches!(
            ScoreTable::parse("CA182Y\tabc"),
            Err(ZScoreError::MalformedLine { .. })
        ));
    }

    #[test]
    fn user_rows_project_onto_requests() {
        let table = ScoreTable::parse("CA182Y\t1.0\nCA182W\t2.0\nGB7A\t3.0\nGB7C\t6.0").unwrap();
        let report = table.score().unwrap();
        let requests = vec![
            MutationRequest::Saturation {
                prefix: "CA182".to_string(),
            },
            MutationRequest::Concrete("GB7A".to_string()),
            MutationRequest::Concrete("CA182Y".to_string()),
        ];
        let rows = report.user_rows(&requests);
        let names: Vec<_> = rows.iter().map(|r| r.mutation.as_str()).collect();
        assert_eq!(names, vec!["CA182Y", "CA182W", "GB7A", "CA182Y"]);
    }

    #[test]
    fn all_rows_carry_raw_values() {
        let table = ScoreTable::parse("CA182Y\t1.0\nCA182W\t3.0").unwrap();
        let rows = table.score().unwrap().all_rows();
        assert_eq!(rows[1].mutation, "CA182W");
        assert_eq!(rows[1].ddg, 3.0);
        assert!((rows[1].zscore - 1.0).abs() < TOL);
    }

    #[test]
    fn extremes_pick_lowest_and_highest_ddg() {
        let table = ScoreTable::parse("A\t1.0\nB\t-2.0\nC\t3.0").unwrap();
        let report = table.score().unwrap();
        let (low, high) = report.extremes().unwrap();
        assert_eq!(low.key, key("B"));
        assert_eq!(high.key, key("C"));
    }
}
