use super::read_mutation_list;
use crate::cli::ExpandArgs;
use crate::error::Result;
use saambe::core::io::mutation_file::{write_mutation_file, write_mutation_file_to_path};
use saambe::workflows::ddg::{load_chain_residue_map, prepare_mutations};
use std::io::Write;
use tracing::info;

pub fn run(args: ExpandArgs) -> Result<()> {
    let residues = load_chain_residue_map(&args.input.structure)?;
    let mutation_list = read_mutation_list(&args.input.mutations)?;
    let (_, mutations) = prepare_mutations(&residues, &mutation_list)?;

    match &args.output {
        Some(path) => {
            info!("Writing {} substitution(s) to {:?}", mutations.len(), path);
            write_mutation_file_to_path(&mutations, path)?;
            println!(
                "✓ {} substitution(s) written to: {}",
                mutations.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_mutation_file(&mutations, &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
