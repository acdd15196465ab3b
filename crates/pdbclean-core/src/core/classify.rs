use super::residues;
use std::fmt;

/// Structural category of a residue, derived from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueCategory {
    /// Crystallographic water (HOH/WAT).
    Water,
    /// One of the 20 canonical amino acids or a recognized
    /// protonation/tautomer variant.
    StandardAminoAcid,
    /// A residue named in a user-supplied removal list. Request-specific:
    /// assigned by the selection policy, never by [`classify`].
    Heteroatom,
    /// Anything else: nucleic acids, modified residues, unlisted ligands.
    Other,
}

impl fmt::Display for ResidueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResidueCategory::Water => "Water",
                ResidueCategory::StandardAminoAcid => "Standard amino acid",
                ResidueCategory::Heteroatom => "Heteroatom",
                ResidueCategory::Other => "Other",
            }
        )
    }
}

/// Classifies a residue name against the fixed reference tables.
///
/// Lookup order is water first, then standard amino acid, then
/// [`ResidueCategory::Other`]. The tables are disjoint by construction, so
/// the order only matters as documentation of intent. Pure function; any
/// casing or surrounding whitespace is accepted.
pub fn classify(residue_name: &str) -> ResidueCategory {
    if residues::is_water(residue_name) {
        ResidueCategory::Water
    } else if residues::is_standard_amino_acid(residue_name) {
        ResidueCategory::StandardAminoAcid
    } else {
        ResidueCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognizes_water() {
        assert_eq!(classify("HOH"), ResidueCategory::Water);
        assert_eq!(classify("wat"), ResidueCategory::Water);
    }

    #[test]
    fn classify_recognizes_standard_amino_acids() {
        assert_eq!(classify("ALA"), ResidueCategory::StandardAminoAcid);
        assert_eq!(classify("gly"), ResidueCategory::StandardAminoAcid);
        assert_eq!(classify("HIE"), ResidueCategory::StandardAminoAcid);
        assert_eq!(classify("CYX"), ResidueCategory::StandardAminoAcid);
    }

    #[test]
    fn classify_falls_back_to_other() {
        assert_eq!(classify("PO4"), ResidueCategory::Other);
        assert_eq!(classify("HEM"), ResidueCategory::Other);
        assert_eq!(classify("DA"), ResidueCategory::Other);
        assert_eq!(classify(""), ResidueCategory::Other);
    }

    #[test]
    fn classify_never_returns_heteroatom() {
        // Heteroatom membership is a property of the request, not the name.
        for name in ["PO4", "HOH", "ALA", "XYZ"] {
            assert_ne!(classify(name), ResidueCategory::Heteroatom);
        }
    }

    #[test]
    fn classify_normalizes_input() {
        assert_eq!(classify(" ala "), ResidueCategory::StandardAminoAcid);
        assert_eq!(classify(" HOH"), ResidueCategory::Water);
    }
}
