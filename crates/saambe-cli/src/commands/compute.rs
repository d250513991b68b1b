use super::read_mutation_list;
use crate::cli::ComputeArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use saambe::{
    engine::{progress::ProgressReporter, runner::SaambeRunner},
    workflows::{self, ddg::DdgJob},
};
use tracing::info;

pub fn run(args: ComputeArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(&args)?;
    let mutation_list = read_mutation_list(&app.mutations_path)?;

    let runner = SaambeRunner::new(app.core_config.saambe.clone());
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting ddG computation...");
    info!("Invoking the core ddG workflow...");

    let job = DdgJob {
        structure_path: &app.structure_path,
        mutation_list: &mutation_list,
    };
    let outcome = workflows::ddg::run(&job, &app.core_config, &runner, &reporter)?;

    for line in outcome.summary() {
        println!("  {}", line);
    }
    println!(
        "✓ All scores written to: {}",
        outcome.tables.all_scores_path.display()
    );
    println!(
        "✓ Requested scores written to: {}",
        outcome.tables.user_scores_path.display()
    );
    for line in outcome.methods() {
        info!("{}", line);
    }
    Ok(())
}
