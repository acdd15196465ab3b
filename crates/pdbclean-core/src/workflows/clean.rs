use super::error::CleanError;
use super::progress::{Progress, ProgressReporter};
use crate::core::residues::is_hydrogen_atom;
use crate::selection::config::CleanRequest;
use crate::selection::policy::{Decision, RemovalReason, SelectionPolicy};
use pdbtbx::StrictnessLevel;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Tally of what one cleaning run did, broken down by removal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanReport {
    pub residues_seen: usize,
    pub residues_kept: usize,
    pub waters_removed: usize,
    pub heteroatoms_removed: usize,
    pub non_protein_removed: usize,
    /// Hydrogen atoms stripped from surviving residues.
    pub hydrogens_removed: usize,
}

impl CleanReport {
    pub fn residues_removed(&self) -> usize {
        self.waters_removed + self.heteroatoms_removed + self.non_protein_removed
    }
}

/// Cleans the structure at `input` and writes the result to `output`.
///
/// Residues are read in file order, judged independently by the selection
/// policy compiled from `request`, and surviving residues are written in
/// the same relative order — the output is a strict order-preserving
/// subsequence of the input. The file is written to a sibling temporary
/// path and renamed into place, so a failed run never leaves a partial
/// file at the destination.
#[instrument(skip_all, name = "clean_workflow")]
pub fn run(
    input: &Path,
    output: &Path,
    request: &CleanRequest,
    reporter: &ProgressReporter,
) -> Result<CleanReport, CleanError> {
    // === Phase 1: Parse ===
    reporter.report(Progress::PhaseStart { name: "Parsing" });
    if !input.exists() {
        return Err(CleanError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    info!("Loading structure from {:?}", input);
    let (mut pdb, warnings) =
        pdbtbx::open(input.to_string_lossy().as_ref()).map_err(|errors| CleanError::Parse {
            path: input.to_path_buf(),
            message: join_messages(&errors),
        })?;
    for warning in &warnings {
        warn!("Parser: {}", warning);
    }
    info!(
        residues = pdb.residue_count(),
        atoms = pdb.atom_count(),
        "Structure loaded."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Filter ===
    reporter.report(Progress::PhaseStart { name: "Filtering" });
    let policy = SelectionPolicy::new(request);

    let mut report = CleanReport::default();
    for residue in pdb.residues() {
        let name = residue.name().unwrap_or_default();
        report.residues_seen += 1;
        match policy.decide(name) {
            Decision::Keep => report.residues_kept += 1,
            Decision::Remove(reason) => {
                debug!(
                    "Removing residue {} {} ({})",
                    name,
                    residue.serial_number(),
                    reason
                );
                match reason {
                    RemovalReason::Water => report.waters_removed += 1,
                    RemovalReason::HeteroatomList => report.heteroatoms_removed += 1,
                    RemovalReason::NotProtein => report.non_protein_removed += 1,
                }
            }
        }
    }

    pdb.remove_residues_by(|residue| !policy.keeps(residue.name().unwrap_or_default()));

    if request.remove_hydrogens {
        let atoms_before = pdb.atom_count();
        pdb.remove_atoms_by(|atom| is_hydrogen_atom(atom.name()));
        report.hydrogens_removed = atoms_before - pdb.atom_count();
        debug!(
            "Stripped {} hydrogen atom(s) from surviving residues.",
            report.hydrogens_removed
        );
    }

    // Chains (and models) emptied by the removal pass carry no records.
    pdb.remove_empty();

    info!(
        kept = report.residues_kept,
        removed = report.residues_removed(),
        "Filtering complete."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Write ===
    reporter.report(Progress::PhaseStart { name: "Writing" });
    write_atomic(&pdb, output)?;
    info!("Cleaned structure written to {:?}", output);
    reporter.report(Progress::PhaseFinish);
    reporter.report(Progress::Message(format!(
        "Kept {} of {} residue(s).",
        report.residues_kept, report.residues_seen
    )));

    Ok(report)
}

/// Writes via a sibling temporary file plus rename, so the destination is
/// either the previous file or the complete new one — never a torso.
fn write_atomic(pdb: &pdbtbx::PDB, output: &Path) -> Result<(), CleanError> {
    let tmp = temp_sibling_path(output);

    if let Err(errors) = pdbtbx::save_pdb(pdb, tmp.to_string_lossy().as_ref(), StrictnessLevel::Loose)
    {
        let _ = std::fs::remove_file(&tmp);
        return Err(CleanError::Write {
            path: output.to_path_buf(),
            message: join_messages(&errors),
        });
    }

    if let Err(e) = std::fs::rename(&tmp, output) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn temp_sibling_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output.pdb".into());
    name.push(".tmp");
    output.with_file_name(name)
}

fn join_messages(errors: &[pdbtbx::PDBError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
