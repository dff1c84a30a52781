//! Error types for the digestkit Core Library
//!
//! The digest engine itself cannot fail: every byte sequence is valid input.
//! Errors only arise on the surfaces around it (reading streams and files,
//! parsing digests from text, loading configuration).

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the digestkit Core Library
///
/// Errors are categorized into two main types:
/// - I/O errors: reading from streams and files
/// - Validation errors: malformed digests, unknown algorithms, bad configuration
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Validation(ValidationError::invalid_configuration(&err.to_string()))
    }
}
