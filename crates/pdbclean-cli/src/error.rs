use pdbclean::selection::config::ConfigError;
use pdbclean::workflows::error::CleanError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Clean(#[from] CleanError),

    #[error("Invalid options: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
