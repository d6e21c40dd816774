use thiserror::Error;

use altv_natives_lib::GenerateError;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Generation failed
    #[error("{0}")]
    Generate(#[from] GenerateError),
}
