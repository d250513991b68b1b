use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Carlos Oscar Sorzano, Natalia del Rey",
    version,
    about = "SAAMBE CLI - Predict binding free energy changes (ddG) of protein mutations with SAAMBE-3D.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output; command errors are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the mutations, run SAAMBE-3D and write the z-score tables.
    Compute(ComputeArgs),
    /// Check a mutation list against a structure without running the predictor.
    Validate(ValidateArgs),
    /// Write the predictor mutation file for a mutation list.
    Expand(ExpandArgs),
    /// Rebuild the score tables from an existing SAAMBE-3D output.
    Normalize(NormalizeArgs),
}

/// Structure and mutation list shared by the commands that validate mutations.
#[derive(Args, Debug, Clone)]
pub struct MutationInput {
    /// Path to the input structure (PDB) containing the interacting chains.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub structure: PathBuf,

    /// Path to the mutation list, one mutation per line (e.g. `CA182Y` or `A 182 C Y`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub mutations: PathBuf,
}

/// Arguments for the `compute` subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub input: MutationInput,

    /// Run directory receiving the predictor inputs, raw output and score tables.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Predictor Overrides ---
    /// Directory holding the SAAMBE-3D script.
    #[arg(long, env = "SAAMBE_HOME", value_name = "DIR")]
    pub saambe_home: Option<PathBuf>,

    /// Python interpreter used to launch SAAMBE-3D.
    #[arg(long, value_name = "PATH")]
    pub interpreter: Option<PathBuf>,

    /// Script file name, relative to the SAAMBE-3D home.
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Keep the cleaned structure and mutation file after a successful run.
    #[arg(long)]
    pub keep_intermediate: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S saambe.interpreter=python3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: MutationInput,
}

/// Arguments for the `expand` subcommand.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub input: MutationInput,

    /// Output mutation file. Printed to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Raw SAAMBE-3D output file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub raw: PathBuf,

    /// Mutation list used to select the requested scores.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub mutations: PathBuf,

    /// Directory receiving the score tables.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output: PathBuf,
}
