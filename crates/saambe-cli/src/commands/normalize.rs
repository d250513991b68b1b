use super::read_mutation_list;
use crate::cli::NormalizeArgs;
use crate::error::{CliError, Result};
use saambe::core::models::mutation::MutationRequest;
use saambe::engine::parser::parse_mutation_list;
use saambe::engine::validator::token_request;
use saambe::workflows::ddg::score_raw_output;
use tracing::info;

pub fn run(args: NormalizeArgs) -> Result<()> {
    let mutation_list = read_mutation_list(&args.mutations)?;
    let requests = parse_requests(&mutation_list)?;

    std::fs::create_dir_all(&args.output)?;
    info!("Re-scoring {:?} into {:?}", args.raw, args.output);
    let tables = score_raw_output(&args.raw, &requests, &args.output)?;

    for line in tables.summary() {
        println!("  {}", line);
    }
    println!(
        "✓ All scores written to: {}",
        tables.all_scores_path.display()
    );
    println!(
        "✓ Requested scores written to: {}",
        tables.user_scores_path.display()
    );
    Ok(())
}

/// Requests named by a mutation list; notation and positions are checked, not the structure.
fn parse_requests(mutation_list: &str) -> Result<Vec<MutationRequest>> {
    let mut requests = Vec::new();
    let mut errors = Vec::new();
    for parsed in parse_mutation_list(mutation_list) {
        match parsed.and_then(|token| token_request(&token)) {
            Ok(request) => requests.push(request),
            Err(e) => errors.push(e.to_string()),
        }
    }
    if !errors.is_empty() {
        return Err(CliError::Argument(errors.join("\n")));
    }
    if requests.is_empty() {
        return Err(CliError::Argument("no mutations specified".to_string()));
    }
    Ok(requests)
}
