//! Fixed-capacity accumulator for bytes that do not yet form a full block

use super::core::BLOCK_LENGTH;
use zeroize::Zeroize;

/// Holds the tail of the input that is shorter than one block.
///
/// The buffer never grows past [`BLOCK_LENGTH`]; callers drain it with
/// [`ByteBuffer::clear`] as soon as it is full.
#[derive(Clone, Copy)]
pub(crate) struct ByteBuffer {
    bytes: [u8; BLOCK_LENGTH],
    len: usize,
}

impl ByteBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0; BLOCK_LENGTH],
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == BLOCK_LENGTH
    }

    /// Copy as much of `data` as fits and return how many bytes were taken
    pub(crate) fn fill(&mut self, data: &[u8]) -> usize {
        let taken = data.len().min(BLOCK_LENGTH - self.len);
        self.bytes[self.len..self.len + taken].copy_from_slice(&data[..taken]);
        self.len += taken;
        taken
    }

    /// Buffered bytes, in arrival order
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The whole backing block; only meaningful when [`is_full`](Self::is_full)
    pub(crate) fn block(&self) -> &[u8; BLOCK_LENGTH] {
        &self.bytes
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.zeroize();
        self.len = 0;
    }
}

impl Zeroize for ByteBuffer {
    fn zeroize(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for ByteBuffer {
    // Message bytes stay out of debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteBuffer").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_partial() {
        let mut buffer = ByteBuffer::new();
        assert!(buffer.is_empty());

        assert_eq!(buffer.fill(b"abc"), 3);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_slice(), b"abc");
        assert!(!buffer.is_full());
    }

    #[test]
    fn test_fill_stops_at_capacity() {
        let mut buffer = ByteBuffer::new();
        buffer.fill(&[0x11; 60]);

        let taken = buffer.fill(&[0x22; 10]);
        assert_eq!(taken, 4);
        assert!(buffer.is_full());
        assert_eq!(&buffer.block()[56..], &[0x11, 0x11, 0x11, 0x11, 0x22, 0x22, 0x22, 0x22]);

        // Full buffer takes nothing more
        assert_eq!(buffer.fill(b"x"), 0);
    }

    #[test]
    fn test_clear_wipes_bytes() {
        let mut buffer = ByteBuffer::new();
        buffer.fill(&[0xFF; BLOCK_LENGTH]);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.block(), &[0u8; BLOCK_LENGTH]);
    }

    #[test]
    fn test_debug_hides_contents() {
        let mut buffer = ByteBuffer::new();
        buffer.fill(b"secret");
        let rendered = format!("{buffer:?}");
        assert!(rendered.contains("len: 6"));
        assert!(!rendered.contains("secret"));
    }
}
