//! Error types for compiler probing

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Compiler probe errors
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn or wait on the compiler (or its launcher)
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[from] io::Error),

    /// Process timed out
    #[error("Process timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// Failed to create or write the scratch source file
    #[error("Failed to prepare scratch source: {0}")]
    ScratchFile(io::Error),
}

/// Result type for process operations
pub type Result<T> = std::result::Result<T, ProcessError>;
