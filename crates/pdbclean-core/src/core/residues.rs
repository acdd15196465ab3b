use phf::{Set, phf_set};

static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT",
};

static STANDARD_AMINO_ACID_NAMES: Set<&'static str> = phf_set! {
    // --- The 20 canonical residues ---
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    // --- Amber protonation/tautomer variants ---
    "HID", "HIE", "HIP", "CYX", "CYM", "ASH", "GLH", "LYN",
    // --- CHARMM histidine tautomers ---
    "HSD", "HSE", "HSP",
};

/// Canonical form of a residue name: trimmed and uppercased.
///
/// All name comparisons in this crate are case-insensitive, matching
/// structure-file convention; normalizing once here keeps every lookup
/// consistent.
pub fn normalize_residue_name(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

pub fn is_water(residue_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(normalize_residue_name(residue_name).as_str())
}

pub fn is_standard_amino_acid(residue_name: &str) -> bool {
    STANDARD_AMINO_ACID_NAMES.contains(normalize_residue_name(residue_name).as_str())
}

/// Returns `true` if the atom name denotes a hydrogen or deuterium atom.
///
/// Leading digits are ignored so rotated PDB names like `1HB2` are
/// recognized alongside `HB21`.
pub fn is_hydrogen_atom(atom_name: &str) -> bool {
    let stripped = atom_name
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_digit());
    matches!(
        stripped.chars().next().map(|c| c.to_ascii_uppercase()),
        Some('H') | Some('D')
    )
}
