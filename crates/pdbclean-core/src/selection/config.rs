use crate::core::residues::normalize_residue_name;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error(
        "incompatible options: keeping only protein residues cannot be combined with an explicit heteroatom removal list"
    )]
    IncompatibleOptions,
}

/// The validated, immutable description of one cleaning run.
///
/// Constructed through [`CleanRequest::builder`]; an instance existing at
/// all means the mode combination is valid. Heteroatom names are stored
/// trimmed and uppercased, so membership tests are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanRequest {
    pub remove_water: bool,
    pub hetero_to_remove: HashSet<String>,
    pub keep_protein_only: bool,
    pub remove_hydrogens: bool,
}

impl CleanRequest {
    pub fn builder() -> CleanRequestBuilder {
        CleanRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CleanRequestBuilder {
    remove_water: bool,
    keep_protein_only: bool,
    remove_hydrogens: bool,
    hetero_to_remove: Vec<String>,
}

impl CleanRequestBuilder {
    pub fn remove_water(mut self, yes: bool) -> Self {
        self.remove_water = yes;
        self
    }

    pub fn keep_protein_only(mut self, yes: bool) -> Self {
        self.keep_protein_only = yes;
        self
    }

    pub fn remove_hydrogens(mut self, yes: bool) -> Self {
        self.remove_hydrogens = yes;
        self
    }

    pub fn hetero_to_remove<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hetero_to_remove = names
            .into_iter()
            .map(|name| normalize_residue_name(name.as_ref()))
            .collect();
        self
    }

    /// Validates the mode combination and produces the immutable request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IncompatibleOptions`] when `keep_protein_only`
    /// is combined with a non-empty heteroatom removal list. This runs
    /// before any file is opened — fail fast, no partial output.
    pub fn build(self) -> Result<CleanRequest, ConfigError> {
        let hetero_to_remove: HashSet<String> = self
            .hetero_to_remove
            .into_iter()
            .filter(|name| !name.is_empty())
            .collect();

        if self.keep_protein_only && !hetero_to_remove.is_empty() {
            return Err(ConfigError::IncompatibleOptions);
        }

        Ok(CleanRequest {
            remove_water: self.remove_water,
            hetero_to_remove,
            keep_protein_only: self.keep_protein_only,
            remove_hydrogens: self.remove_hydrogens,
        })
    }
}
