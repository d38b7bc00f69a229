//! Error types for promptfill.
//!
//! Uses thiserror for derive macros. Library operations return the narrower
//! [`TemplateError`] or [`ParamError`]; the CLI lifts everything into
//! [`PromptError`] so each failure maps to an exit code.

use crate::exit_codes;
use crate::params::ParamError;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for promptfill operations.
#[derive(Error, Debug)]
pub enum PromptError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// The body does not satisfy the template's placeholders.
    #[error("Validation failed: {0}")]
    Template(#[from] TemplateError),

    /// Parameter values or the parameter schema were rejected.
    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamError),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::Template(_) => exit_codes::VALIDATION_FAILURE,
            PromptError::Params(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for promptfill operations.
pub type Result<T> = std::result::Result<T, PromptError>;
