//! # PDBClean Core Library
//!
//! A library for cleaning Protein Data Bank (PDB) structure files by
//! classifying every residue of a parsed structure and filtering the
//! structure through a validated selection policy before it is written
//! back out.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the process-wide residue-name
//!   reference tables and the pure classification function
//!   ([`core::classify::classify`]). No I/O, no request-specific state.
//!
//! - **[`selection`]: The Logic Core.** Turns validated user intent
//!   ([`selection::config::CleanRequest`]) into a per-residue keep/remove
//!   decision ([`selection::policy::SelectionPolicy`]). Validation happens
//!   while the request is constructed, never during filtering.
//!
//! - **[`workflows`]: The Public API.** Ties the two lower layers to the
//!   external PDB parser/writer (`pdbtbx`) and executes the complete
//!   parse → filter → write procedure ([`workflows::clean::run`]). Parsing
//!   and serialization of the PDB format are delegated entirely to the
//!   collaborator crate; this library never touches record layout.

pub mod core;
pub mod selection;
pub mod workflows;
