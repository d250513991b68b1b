use crate::core::io::mutation_file::write_mutation_file_to_path;
use crate::core::io::pdb::PdbFile;
use crate::core::io::tables::{TableRow, ZScoreRow, write_tsv_to_path};
use crate::core::io::traits::StructureFile;
use crate::core::models::mutation::{ExpandedMutation, MutationRecord, MutationRequest};
use crate::core::models::structure::ChainResidueMap;
use crate::engine::config::DdgConfig;
use crate::engine::error::WorkflowError;
use crate::engine::expander::expand_mutations;
use crate::engine::normalizer::normalize;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::runner::{DdgPredictor, PredictionRequest, RunnerError};
use crate::engine::validator::validate_mutation_list;
use crate::engine::zscore::{ScoreReport, ScoreTable};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

pub const CLEANED_STRUCTURE_FILE: &str = "atomicStructure.pdb";
pub const MUTATION_FILE: &str = "mutations.txt";
pub const RAW_OUTPUT_FILE: &str = "ddg.txt";
pub const ALL_SCORES_FILE: &str = "ddg_all.tsv";
pub const USER_SCORES_FILE: &str = "ddg_zscores.tsv";

const METHODS_SENTENCE: &str =
    "We calculated the ddG for the mutations using the SAAMBE-3D method described in [Pahari2020].";

#[derive(Debug, Clone, Copy)]
pub struct DdgJob<'a> {
    pub structure_path: &'a Path,
    /// Mutation list as typed by the user, one mutation per line.
    pub mutation_list: &'a str,
}

/// Score tables written for one raw output.
#[derive(Debug, Clone)]
pub struct ScoreTables {
    pub report: ScoreReport,
    pub user_rows: Vec<ZScoreRow>,
    pub all_scores_path: PathBuf,
    pub user_scores_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DdgOutcome {
    pub mutations: Vec<ExpandedMutation>,
    pub raw_output_path: PathBuf,
    pub tables: ScoreTables,
}

impl ScoreTables {
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!("Evaluated {} mutation(s).", self.report.scores.len())];
        if let Some((lowest, highest)) = self.report.extremes() {
            lines.push(format!(
                "Most stabilizing: {} (ddG {:.3}, z-score {:.3})",
                lowest.key, lowest.ddg, lowest.zscore
            ));
            lines.push(format!(
                "Most destabilizing: {} (ddG {:.3}, z-score {:.3})",
                highest.key, highest.ddg, highest.zscore
            ));
        }
        lines
    }
}

impl DdgOutcome {
    pub fn summary(&self) -> Vec<String> {
        self.tables.summary()
    }

    pub fn methods(&self) -> Vec<String> {
        vec![METHODS_SENTENCE.to_string()]
    }
}

#[instrument(skip_all, name = "ddg_workflow")]
pub fn run<P: DdgPredictor + ?Sized>(
    job: &DdgJob<'_>,
    config: &DdgConfig,
    predictor: &P,
    reporter: &ProgressReporter,
) -> Result<DdgOutcome, WorkflowError> {
    let run_dir = config.output.run_directory.as_path();

    // === Phase 1: Structure index ===
    let residues = reporter.phase("Reading Structure", || {
        load_chain_residue_map(job.structure_path)
    })?;

    // === Phase 2: Validation and expansion ===
    let (records, mutations) = reporter.phase("Validating Mutations", || {
        prepare_mutations(&residues, job.mutation_list)
    })?;
    reporter.report(Progress::Message(format!(
        "{} mutation(s) requested, {} to evaluate",
        records.len(),
        mutations.len()
    )));

    // === Phase 3: Predictor inputs ===
    let structure_path = run_dir.join(CLEANED_STRUCTURE_FILE);
    let mutation_path = run_dir.join(MUTATION_FILE);
    reporter.phase("Preparing Inputs", || {
        fs::create_dir_all(run_dir).map_err(|source| WorkflowError::Io {
            path: run_dir.to_path_buf(),
            source,
        })?;
        PdbFile::clean_to_path(job.structure_path, &structure_path).map_err(|source| {
            WorkflowError::Structure {
                path: job.structure_path.to_path_buf(),
                source,
            }
        })?;
        write_mutation_file_to_path(&mutations, &mutation_path).map_err(|source| {
            WorkflowError::Io {
                path: mutation_path.clone(),
                source,
            }
        })
    })?;

    // === Phase 4: Prediction ===
    let raw_output_path = run_dir.join(RAW_OUTPUT_FILE);
    reporter.phase("Running SAAMBE-3D", || {
        remove_stale_output(&raw_output_path)?;
        predictor.predict(&PredictionRequest {
            structure: &structure_path,
            mutation_file: &mutation_path,
            output: &raw_output_path,
        })?;
        if !raw_output_path.is_file() {
            return Err(WorkflowError::Predictor(RunnerError::MissingOutput(
                raw_output_path.clone(),
            )));
        }
        Ok::<_, WorkflowError>(())
    })?;

    // === Phase 5: Scoring ===
    let requests: Vec<MutationRequest> = records.iter().map(MutationRecord::request).collect();
    let tables = reporter.phase("Scoring", || {
        score_raw_output(&raw_output_path, &requests, run_dir)
    })?;

    if !config.output.keep_intermediate {
        for path in [&structure_path, &mutation_path] {
            fs::remove_file(path).map_err(|source| WorkflowError::Io {
                path: path.clone(),
                source,
            })?;
        }
        debug!("Removed intermediate predictor inputs.");
    }

    info!(
        "Workflow complete. {} mutation(s) scored.",
        tables.report.scores.len()
    );
    Ok(DdgOutcome {
        mutations,
        raw_output_path,
        tables,
    })
}

/// Output left by an earlier run in the same directory must never be scored as this run's.
fn remove_stale_output(path: &Path) -> Result<(), WorkflowError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed stale predictor output {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(WorkflowError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Residue index of the first model of a PDB file.
pub fn load_chain_residue_map(path: &Path) -> Result<ChainResidueMap, WorkflowError> {
    let structure =
        PdbFile::read_from_path(path).map_err(|source| WorkflowError::Structure {
            path: path.to_path_buf(),
            source,
        })?;
    match structure.chain_residue_map() {
        Some(map) if !map.is_empty() => {
            info!(
                "Indexed {} chain(s) from '{}'.",
                map.chain_count(),
                path.display()
            );
            Ok(map.clone())
        }
        _ => Err(WorkflowError::EmptyStructure(path.to_path_buf())),
    }
}

pub fn prepare_mutations(
    residues: &ChainResidueMap,
    mutation_list: &str,
) -> Result<(Vec<MutationRecord>, Vec<ExpandedMutation>), WorkflowError> {
    let records = validate_mutation_list(residues, mutation_list)?;
    let mutations = expand_mutations(&records);
    Ok((records, mutations))
}

/// Normalizes a raw predictor output and writes both score tables into `out_dir`.
pub fn score_raw_output(
    raw_output_path: &Path,
    requests: &[MutationRequest],
    out_dir: &Path,
) -> Result<ScoreTables, WorkflowError> {
    let raw = fs::read_to_string(raw_output_path).map_err(|source| WorkflowError::Io {
        path: raw_output_path.to_path_buf(),
        source,
    })?;
    let normalized = normalize(&raw)?;
    let report = ScoreTable::parse(&normalized)?.score()?;
    info!(
        "Scored {} prediction(s): mean {:.3}, std {:.3}",
        report.scores.len(),
        report.statistics.mean,
        report.statistics.std_dev
    );

    let user_rows = report.user_rows(requests);
    let all_scores_path = out_dir.join(ALL_SCORES_FILE);
    let user_scores_path = out_dir.join(USER_SCORES_FILE);
    write_table(&report.all_rows(), &all_scores_path)?;
    write_table(&user_rows, &user_scores_path)?;

    Ok(ScoreTables {
        report,
        user_rows,
        all_scores_path,
        user_scores_path,
    })
}

fn write_table<T: TableRow>(rows: &[T], path: &Path) -> Result<(), WorkflowError> {
    write_tsv_to_path(rows, path).map_err(|source| WorkflowError::Table {
        path: path.to_path_buf(),
        source,
    })
}
