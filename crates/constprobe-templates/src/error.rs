//! Error types for template parsing and variant expansion

use thiserror::Error;

/// Errors raised while parsing templates or expanding variants
///
/// All of these point at a defect in the template catalog itself, so callers
/// treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder name does not belong to any known family
    #[error("Unknown placeholder family: {0}")]
    UnknownPlaceholder(String),

    /// No value was bound for a placeholder during rendering
    #[error("Missing required placeholder: {0}")]
    MissingPlaceholder(String),

    /// Malformed template syntax
    #[error("Invalid template syntax at line {line}: {message}")]
    InvalidSyntax {
        /// Line number where syntax error occurred
        line: usize,
        /// Error message describing the syntax issue
        message: String,
    },
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
