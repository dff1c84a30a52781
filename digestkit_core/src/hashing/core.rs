//! Compression-function abstraction shared by MD5 and SHA-1
//!
//! Both algorithms consume 64-byte blocks and finish with the same
//! Merkle-Damgard padding. They differ in state width, round structure and
//! byte order: MD5 reads and writes little-endian words and a little-endian
//! length field, SHA-1 uses big-endian throughout. The byte order is carried
//! by [`CompressionCore::BYTE_ORDER`] and every conversion between bytes and
//! words goes through [`ByteOrder`].

use super::HashAlgorithm;
use std::fmt;
use zeroize::Zeroize;

/// Size of one compression block in bytes
pub const BLOCK_LENGTH: usize = 64;

/// Number of 32-bit words in one block
pub const BLOCK_WORDS: usize = BLOCK_LENGTH / 4;

/// Offset of the 8-byte length field inside the final padded block
pub(crate) const LENGTH_OFFSET: usize = BLOCK_LENGTH - 8;

/// Word and length-field byte order of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first (MD5)
    Little,
    /// Most significant byte first (SHA-1)
    Big,
}

impl ByteOrder {
    #[inline(always)]
    fn word_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }

    #[inline(always)]
    fn word_to(self, word: u32) -> [u8; 4] {
        match self {
            ByteOrder::Little => word.to_le_bytes(),
            ByteOrder::Big => word.to_be_bytes(),
        }
    }

    /// Split a block into its sixteen message words
    #[inline]
    pub fn read_block(self, block: &[u8; BLOCK_LENGTH]) -> [u32; BLOCK_WORDS] {
        let mut words = [0u32; BLOCK_WORDS];
        for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = self.word_from([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// Serialize a state vector into its digest bytes
    ///
    /// `M` must be `4 * N`.
    pub fn write_words<const N: usize, const M: usize>(self, words: &[u32; N]) -> [u8; M] {
        debug_assert_eq!(M, N * 4);
        let mut bytes = [0u8; M];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&self.word_to(*word));
        }
        bytes
    }

    /// Encode the message bit length for the tail of the final block
    pub fn encode_length(self, length_bits: u64) -> [u8; 8] {
        match self {
            ByteOrder::Little => length_bits.to_le_bytes(),
            ByteOrder::Big => length_bits.to_be_bytes(),
        }
    }
}

/// One block-compression algorithm.
///
/// Implementors are zero-sized markers; all data lives in [`Self::State`],
/// which [`HashState`](super::HashState) owns.
pub trait CompressionCore: 'static {
    /// Algorithm this core implements
    const ALGORITHM: HashAlgorithm;

    /// Byte order for block words, the length field and the output
    const BYTE_ORDER: ByteOrder;

    /// Length of the raw digest in bytes
    const DIGEST_LENGTH: usize;

    /// Chaining state carried between blocks
    type State: Copy + Zeroize + PartialEq + fmt::Debug + Send + Sync;

    /// Raw digest produced from a final state
    type Output: Copy + AsRef<[u8]> + fmt::LowerHex + fmt::UpperHex + fmt::Debug + Eq;

    /// State before any block has been processed
    fn initial_state() -> Self::State;

    /// Fold one full block into `state`
    fn compress(state: &mut Self::State, block: &[u8; BLOCK_LENGTH]);

    /// Serialize a final state as the digest
    fn output(state: &Self::State) -> Self::Output;
}
