//! # Core Module
//!
//! The stateless foundation of the library: fixed residue-name reference
//! tables and the pure classification function built on top of them.
//!
//! Everything in this module is a process-wide constant fact about PDB
//! nomenclature. Nothing here depends on a user request; request-specific
//! concerns (e.g. which heteroatoms to remove) belong to the
//! [`selection`](crate::selection) layer.
//!
//! - [`residues`] - Compile-time name sets (water, standard amino acids) and
//!   small helpers over residue/atom names
//! - [`classify`] - [`ResidueCategory`](classify::ResidueCategory) and the
//!   `classify` function

pub mod classify;
pub mod residues;
