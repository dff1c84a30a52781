//! Builder for byte messages fed to hashers

use std::io::{self, Write};
use tempfile::NamedTempFile;

/// Builder for test messages
///
/// Segments are appended in call order.
///
/// ```rust
/// use digestkit_test_utils::MessageBuilder;
///
/// let message = MessageBuilder::new()
///     .text("abc")
///     .repeat(b'a', 61)
///     .build();
/// assert_eq!(message.len(), 64);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    bytes: Vec<u8>,
}

impl MessageBuilder {
    /// Create an empty message builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append UTF-8 text
    pub fn text(mut self, text: &str) -> Self {
        self.bytes.extend_from_slice(text.as_bytes());
        self
    }

    /// Append raw bytes
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Append `count` copies of `byte`
    pub fn repeat(mut self, byte: u8, count: usize) -> Self {
        self.bytes.resize(self.bytes.len() + count, byte);
        self
    }

    /// Append `len` bytes counting 0, 1, .., 255, 0, ..
    pub fn counting(mut self, len: usize) -> Self {
        self.bytes.extend((0..len).map(|i| i as u8));
        self
    }

    /// Append `len` deterministic pseudo-random bytes (xorshift32)
    pub fn pseudo_random(mut self, len: usize, seed: u32) -> Self {
        let mut x = seed.max(1);
        self.bytes.extend((0..len).map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        }));
        self
    }

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Finish and return the message
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the message to a temporary file that lives as long as the handle
    pub fn write_temp_file(&self) -> io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&self.bytes)?;
        file.flush()?;
        Ok(file)
    }
}

/// Split `message` into consecutive chunks of the given sizes
///
/// Sizes cycle until the message is exhausted; a zero size yields an empty
/// chunk. With no non-zero size the whole message is one chunk. The
/// concatenation of the chunks is always `message`.
pub fn split_by_sizes<'a>(message: &'a [u8], sizes: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = message;
    if sizes.iter().all(|&size| size == 0) {
        chunks.push(rest);
        return chunks;
    }
    for &size in sizes.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(size.min(rest.len()));
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}
