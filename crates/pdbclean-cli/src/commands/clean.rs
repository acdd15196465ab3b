use crate::cli::Cli;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use pdbclean::selection::config::CleanRequest;
use pdbclean::workflows::clean::{self, CleanReport};
use pdbclean::workflows::progress::ProgressReporter;
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    let request = CleanRequest::builder()
        .remove_water(args.remove_water)
        .keep_protein_only(args.keep_protein_only)
        .remove_hydrogens(args.remove_hydrogens)
        .hetero_to_remove(&args.hetatm)
        .build()?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    info!("Cleaning {:?} into {:?}", &args.input, &args.output);
    let report = clean::run(&args.input, &args.output, &request, &reporter)?;

    print_report(&report, args);
    Ok(())
}

fn print_report(report: &CleanReport, args: &Cli) {
    println!(
        "✓ Cleaned structure written to: {}",
        args.output.display()
    );
    println!(
        "  Residues: {} kept, {} removed (of {})",
        report.residues_kept,
        report.residues_removed(),
        report.residues_seen
    );
    if report.waters_removed > 0 {
        println!("    waters removed:          {}", report.waters_removed);
    }
    if report.heteroatoms_removed > 0 {
        println!("    heteroatoms removed:     {}", report.heteroatoms_removed);
    }
    if report.non_protein_removed > 0 {
        println!("    non-protein removed:     {}", report.non_protein_removed);
    }
    if report.hydrogens_removed > 0 {
        println!("    hydrogen atoms stripped: {}", report.hydrogens_removed);
    }
}
