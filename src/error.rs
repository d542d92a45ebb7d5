//! Validation Errors
//!
//! The only failure the screen knows about is a blank submission.

use thiserror::Error;

/// Rejection of a candidate item text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty or whitespace-only text
    #[error("This field is required")]
    Blank,
}

/// Result of a validating operation
pub type ValidationResult<T> = Result<T, ValidationError>;
