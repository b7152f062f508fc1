//! CLI error types

use constprobe_process::ProcessError;
use constprobe_templates::TemplateError;
use thiserror::Error;

/// Errors that abort a probe run
#[derive(Debug, Error)]
pub enum CliError {
    /// The template catalog is malformed
    #[error("Template catalog error: {0}")]
    Template(#[from] TemplateError),

    /// The compiler or its launcher could not be run
    #[error("Compiler invocation failed: {0}")]
    Process(#[from] ProcessError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No compiler was given on the command line or in configuration
    #[error("No compiler given: pass --cl or set CONSTPROBE_CL")]
    MissingCompiler,

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
