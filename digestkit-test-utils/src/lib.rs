//! Test utilities for digestkit
//!
//! This crate provides message builders, known-answer vectors and mock
//! readers for testing the digest engine and its stream/file surfaces.

pub mod builders;
pub mod mocks;
pub mod vectors;

// Re-export commonly used types
pub use builders::{MessageBuilder, split_by_sizes};
pub use mocks::{ChunkedReader, FailingReader};
pub use vectors::{KnownAnswer, known_answers};
