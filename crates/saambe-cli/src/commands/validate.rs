use super::read_mutation_list;
use crate::cli::ValidateArgs;
use crate::error::Result;
use saambe::workflows::ddg::{load_chain_residue_map, prepare_mutations};
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    let residues = load_chain_residue_map(&args.input.structure)?;
    let mutation_list = read_mutation_list(&args.input.mutations)?;

    let (records, mutations) = prepare_mutations(&residues, &mutation_list)?;
    info!("Validated {} mutation(s).", records.len());

    println!(
        "✓ {} mutation(s) valid, {} substitution(s) to evaluate.",
        records.len(),
        mutations.len()
    );
    Ok(())
}
