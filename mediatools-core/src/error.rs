use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for mediatools
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Command '{0}' timed out after {1} seconds")]
    CommandTimeout(String, u64),

    #[error("Error waiting for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(String),
}

/// Result type for mediatools operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a [`CoreError::CommandStart`] for the given tool.
pub fn command_start_error<S: Into<String>>(cmd: S, e: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), e)
}

/// Builds a [`CoreError::CommandFailed`] carrying the captured stderr.
pub fn command_failed_error<S: Into<String>>(
    cmd: S,
    status: ExitStatus,
    stderr: String,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr)
}
