//! Validation related error types

use thiserror::Error;

/// Validation and configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Hex digest of the wrong length for the algorithm
    #[error("Invalid digest length {value}, expected {expected} hex characters")]
    InvalidDigestLength { value: usize, expected: usize },

    /// Non-hexadecimal character in a digest string
    #[error("Invalid hex character '{character}' at index {index}")]
    InvalidHexCharacter { character: char, index: usize },

    /// Algorithm name not known to the registry
    #[error("Unknown hash algorithm: {name}")]
    UnknownAlgorithm { name: String },
}

impl ValidationError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create an invalid digest length error
    pub fn invalid_digest_length(value: usize, expected: usize) -> Self {
        Self::InvalidDigestLength { value, expected }
    }

    /// Create an invalid hex character error
    pub fn invalid_hex_character(character: char, index: usize) -> Self {
        Self::InvalidHexCharacter { character, index }
    }

    /// Create an unknown algorithm error
    pub fn unknown_algorithm(name: &str) -> Self {
        Self::UnknownAlgorithm {
            name: name.to_string(),
        }
    }
}
