use super::config::CleanRequest;
use crate::core::classify::{ResidueCategory, classify};
use crate::core::residues::normalize_residue_name;
use std::fmt;

/// Why a residue was removed. Feeds the clean report and debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    /// Rejected by the water-removal flag.
    Water,
    /// Named in the user-supplied heteroatom removal list.
    HeteroatomList,
    /// Not a standard amino acid while only protein is kept.
    NotProtein,
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RemovalReason::Water => "water",
                RemovalReason::HeteroatomList => "heteroatom list",
                RemovalReason::NotProtein => "not protein",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Remove(RemovalReason),
}

/// Per-residue keep/remove decision compiled from a [`CleanRequest`].
///
/// The rules compose conjunctively: a residue survives only if every active
/// rule accepts it. Evaluation rejects fast in the order water flag →
/// heteroatom list → protein-only, but since the predicate is a pure
/// conjunction the order never changes the outcome. A request with no mode
/// selected accepts everything.
#[derive(Debug, Clone, Copy)]
pub struct SelectionPolicy<'a> {
    request: &'a CleanRequest,
}

impl<'a> SelectionPolicy<'a> {
    pub fn new(request: &'a CleanRequest) -> Self {
        Self { request }
    }

    pub fn decide(&self, residue_name: &str) -> Decision {
        let name = normalize_residue_name(residue_name);
        let category = classify(&name);

        if self.request.remove_water && category == ResidueCategory::Water {
            return Decision::Remove(RemovalReason::Water);
        }
        if self.request.hetero_to_remove.contains(name.as_str()) {
            return Decision::Remove(RemovalReason::HeteroatomList);
        }
        if self.request.keep_protein_only && category != ResidueCategory::StandardAminoAcid {
            return Decision::Remove(RemovalReason::NotProtein);
        }
        Decision::Keep
    }

    /// The boolean predicate applied to every residue during filtering.
    pub fn keeps(&self, residue_name: &str) -> bool {
        matches!(self.decide(residue_name), Decision::Keep)
    }
}
