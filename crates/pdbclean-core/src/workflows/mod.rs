//! # Workflows Module
//!
//! The highest-level, user-facing layer. [`clean::run`] ties the selection
//! policy to the external PDB parser/writer and executes the complete
//! parse → filter → write procedure, reporting progress through
//! [`progress::ProgressReporter`] so callers can attach any UI they like.

pub mod clean;
pub mod error;
pub mod progress;
