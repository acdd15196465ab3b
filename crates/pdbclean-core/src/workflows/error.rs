use crate::selection::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("Input file not found: {path}", path = path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to parse structure file '{path}': {message}", path = path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write structure file '{path}': {message}", path = path.display())]
    Write { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
