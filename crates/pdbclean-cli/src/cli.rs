use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pdbclean - Cleans PDB structure files by removing unwanted residues and atoms before docking, molecular dynamics, or structural analysis.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input PDB structure file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the cleaned output PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Heteroatom residue names to remove (e.g. -r PO4 SO4).
    /// Incompatible with --keep-protein-only.
    #[arg(short = 'r', long = "hetatm", value_name = "RES_NAME", num_args(1..))]
    pub hetatm: Vec<String>,

    /// Keep only standard amino-acid residues (including protonation variants).
    #[arg(short = 'p', long)]
    pub keep_protein_only: bool,

    /// Remove crystallographic water residues (HOH/WAT).
    #[arg(short = 'w', long)]
    pub remove_water: bool,

    /// Strip all hydrogen atoms from surviving residues.
    #[arg(long)]
    pub remove_hydrogens: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
