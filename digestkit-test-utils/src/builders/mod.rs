//! Builders for test messages

pub mod message;

pub use message::{MessageBuilder, split_by_sizes};
