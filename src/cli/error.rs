//! CLI-level errors (wraps catalog errors)

use thiserror::Error;

use crate::errors::CatalogError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Catalog(e) => match e {
                CatalogError::FileOpen { .. } => exitcode::NOINPUT,
                CatalogError::Read(_) => exitcode::IOERR,
                CatalogError::MalformedRecord { .. } => exitcode::DATAERR,
            },
        }
    }
}
