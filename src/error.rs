//! Crate error type.

use crate::validation::{ParseError, ValidationError};

/// Errors returned by the fallible entry points of this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Request text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Input failed range checks. Contains every detected problem.
    #[error("invalid scheduling input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Algorithm name not recognized.
    #[error("unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
