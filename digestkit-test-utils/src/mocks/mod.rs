//! Mock readers for stream hashing tests

pub mod readers;

pub use readers::{ChunkedReader, FailingReader};
