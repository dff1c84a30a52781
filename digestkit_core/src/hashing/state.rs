//! Streaming hash state shared by every compression core

use super::HashAlgorithm;
use super::algorithms::{Md5Core, Sha1Core};
use super::buffer::ByteBuffer;
use super::core::{BLOCK_LENGTH, CompressionCore, LENGTH_OFFSET};
use super::hex;
use super::traits::StreamingHasher;
use std::fmt;
use std::io::{self, Write};
use zeroize::Zeroize;

/// Incremental hash over an arbitrary number of `update` calls.
///
/// Input may arrive in chunks of any size; the digest is identical to hashing
/// the concatenation in one call. [`digest`](Self::digest) finalizes a copy,
/// so it can be called at any time and further updates continue the same
/// message.
///
/// ```rust
/// use digestkit_core::Sha1;
///
/// let mut hash = Sha1::new();
/// hash.update("ab");
/// hash.update(b"c");
/// assert_eq!(hash.hexdigest(), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
pub struct HashState<C: CompressionCore> {
    state: C::State,
    buffer: ByteBuffer,
    length_bits: u64,
}

/// Streaming MD5
pub type Md5 = HashState<Md5Core>;

/// Streaming SHA-1
pub type Sha1 = HashState<Sha1Core>;

impl<C: CompressionCore> HashState<C> {
    /// Create a state holding the algorithm's initial constants
    pub fn new() -> Self {
        Self {
            state: C::initial_state(),
            buffer: ByteBuffer::new(),
            length_bits: 0,
        }
    }

    /// Algorithm this state computes
    pub fn algorithm(&self) -> HashAlgorithm {
        C::ALGORITHM
    }

    /// Message length so far in bits, modulo 2^64
    pub fn length_bits(&self) -> u64 {
        self.length_bits
    }

    /// Feed more message bytes.
    ///
    /// Always consumes all of `data` and returns its length.
    pub fn update<T: AsRef<[u8]>>(&mut self, data: T) -> usize {
        let data = data.as_ref();
        self.length_bits = self
            .length_bits
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut rest = data;
        if !self.buffer.is_empty() {
            let taken = self.buffer.fill(rest);
            rest = &rest[taken..];
            if !self.buffer.is_full() {
                return data.len();
            }
            C::compress(&mut self.state, self.buffer.block());
            self.buffer.clear();
        }

        let (blocks, tail) = rest.as_chunks::<BLOCK_LENGTH>();
        for block in blocks {
            C::compress(&mut self.state, block);
        }
        self.buffer.fill(tail);

        data.len()
    }

    /// Finalize a copy of the state and return the digest.
    ///
    /// Appends `0x80`, zero bytes up to offset 56 of a block, and the
    /// pre-padding bit length in the algorithm's byte order. One block is
    /// compressed when at most 55 bytes are buffered, two otherwise.
    pub fn digest(&self) -> C::Output {
        let mut state = self.state;
        let mut block = [0u8; BLOCK_LENGTH];

        let pending = self.buffer.as_slice();
        block[..pending.len()].copy_from_slice(pending);
        block[pending.len()] = 0x80;

        if pending.len() >= LENGTH_OFFSET {
            C::compress(&mut state, &block);
            block = [0u8; BLOCK_LENGTH];
        }
        block[LENGTH_OFFSET..].copy_from_slice(&C::BYTE_ORDER.encode_length(self.length_bits));
        C::compress(&mut state, &block);

        let output = C::output(&state);
        state.zeroize();
        block.zeroize();
        output
    }

    /// Lowercase hex rendering of [`digest`](Self::digest)
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest().as_ref())
    }

    /// Return to the freshly created state
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.state = C::initial_state();
        self.buffer.clear();
        self.length_bits = 0;
    }

    /// Overwrite the bit-length counter.
    ///
    /// Lets tests exercise length encodings that would otherwise need
    /// gigabytes of input. The counter no longer matches the bytes fed in.
    #[cfg(any(test, feature = "test-internals"))]
    pub fn set_length_bits(&mut self, length_bits: u64) {
        self.length_bits = length_bits;
    }
}

impl<C: CompressionCore> Default for HashState<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CompressionCore> Clone for HashState<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            buffer: self.buffer,
            length_bits: self.length_bits,
        }
    }
}

impl<C: CompressionCore> Drop for HashState<C> {
    fn drop(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
    }
}

impl<C: CompressionCore> fmt::Debug for HashState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashState")
            .field("algorithm", &C::ALGORITHM)
            .field("buffered", &self.buffer.len())
            .field("length_bits", &self.length_bits)
            .finish()
    }
}

impl<C: CompressionCore> Write for HashState<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.update(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<C: CompressionCore> StreamingHasher for HashState<C> {
    fn algorithm(&self) -> HashAlgorithm {
        C::ALGORITHM
    }

    fn update(&mut self, data: &[u8]) -> usize {
        HashState::update(self, data)
    }

    fn digest(&self) -> Vec<u8> {
        HashState::digest(self).as_ref().to_vec()
    }

    fn hexdigest(&self) -> String {
        HashState::hexdigest(self)
    }

    fn reset(&mut self) {
        HashState::reset(self)
    }

    fn bytes_processed(&self) -> u64 {
        self.length_bits / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_known_vectors() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (b"", "d41d8cd98f00b204e9800998ecf8427e"),
            (b"abc", "900150983cd24fb0d6963f7d28e17f72"),
            (b"message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            (
                b"The quick brown fox jumps over the lazy dog",
                "9e107d9d372bb6826bd81d3542a419d6",
            ),
        ];

        for (input, expected) in test_cases {
            let mut hash = Md5::new();
            assert_eq!(hash.update(input), input.len());
            assert_eq!(hash.hexdigest(), expected, "MD5 mismatch for {input:?}");
        }
    }

    #[test]
    fn test_sha1_known_vectors() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            (b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
            (
                b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
                "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
            ),
            (b"Hello World", "0a4d55a8d778e5022fab701977c5d840bbc486d0"),
        ];

        for (input, expected) in test_cases {
            let mut hash = Sha1::new();
            hash.update(input);
            assert_eq!(hash.hexdigest(), expected, "SHA-1 mismatch for {input:?}");
        }
    }

    /// 55 buffered bytes still fit the length field in the same block
    #[test]
    fn test_padding_single_final_block() {
        let message = [b'a'; 55];

        let mut md5 = Md5::new();
        md5.update(message);
        assert_eq!(md5.hexdigest(), "ef1772b6dff9a122358552954ad0df65");

        let mut sha1 = Sha1::new();
        sha1.update(message);
        assert_eq!(sha1.hexdigest(), "c1c8bbdc22796e28c0e15163d20899b65621d65a");
    }

    /// 56 buffered bytes push the length field into a second block
    #[test]
    fn test_padding_two_final_blocks() {
        let message = [b'a'; 56];

        let mut md5 = Md5::new();
        md5.update(message);
        assert_eq!(md5.hexdigest(), "3b0c8ac703f828b04c6c197006d17218");

        let mut sha1 = Sha1::new();
        sha1.update(message);
        assert_eq!(sha1.hexdigest(), "c2db330f6083854c99d4b5bfb6e8f29f201be699");
    }

    #[test]
    fn test_block_boundaries() {
        let cases = [
            (63, "b06521f39153d618550606be297466d5", "03f09f5b158a7a8cdad920bddc29b81c18a551f5"),
            (64, "014842d480b571495a4a0363793f7367", "0098ba824b5c16427bd7a1122a5a442a25ec644d"),
            (65, "c743a45e0d2e6a95cb859adae0248435", "11655326c708d70319be2610e8a57d9a5b959d3b"),
            (119, "8a7bd0732ed6a28ce75f6dabc90e1613", "ee971065aaa017e0632a8ca6c77bb3bf8b1dfc56"),
            (120, "5f61c0ccad4cac44c75ff505e1f1e537", "f34c1488385346a55709ba056ddd08280dd4c6d6"),
            (128, "e510683b3f5ffe4093d021808bc6ff70", "ad5b3fdbcb526778c2839d2f151ea753995e26a0"),
        ];

        for (length, md5_hex, sha1_hex) in cases {
            let message = vec![b'a'; length];
            let mut md5 = Md5::new();
            md5.update(&message);
            assert_eq!(md5.hexdigest(), md5_hex, "MD5 of {length} bytes");

            let mut sha1 = Sha1::new();
            sha1.update(&message);
            assert_eq!(sha1.hexdigest(), sha1_hex, "SHA-1 of {length} bytes");
        }
    }

    #[test]
    fn test_every_split_point_matches_one_shot() {
        let message: Vec<u8> = (0..200u8).collect();
        let mut whole = Md5::new();
        whole.update(&message);
        let expected = whole.digest();

        for split in 0..=message.len() {
            let mut hash = Md5::new();
            hash.update(&message[..split]);
            hash.update(&message[split..]);
            assert_eq!(hash.digest(), expected, "split at {split}");
        }
    }

    #[test]
    fn test_digest_does_not_mutate_state() {
        let mut hash = Sha1::new();
        hash.update("ab");

        let first = hash.digest();
        let second = hash.digest();
        assert_eq!(first, second);

        hash.update("c");
        assert_eq!(hash.hexdigest(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut hash = Md5::new();
        hash.update("abc");
        let before = hash.digest();

        assert_eq!(hash.update(b""), 0);
        assert_eq!(hash.length_bits(), 24);
        assert_eq!(hash.digest(), before);
    }

    #[test]
    fn test_length_counter_includes_buffered_bytes() {
        let mut hash = Sha1::new();
        hash.update([0u8; 10]);
        assert_eq!(hash.length_bits(), 80);
        hash.update([0u8; 100]);
        assert_eq!(hash.length_bits(), 880);
    }

    #[test]
    fn test_reset() {
        let mut hash = Md5::new();
        hash.update("some data that will be discarded");
        hash.reset();

        assert_eq!(hash.length_bits(), 0);
        assert_eq!(hash.hexdigest(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Sha1::new();
        original.update("ab");
        let mut fork = original.clone();

        original.update("c");
        fork.update("d");
        assert_eq!(original.hexdigest(), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_ne!(original.digest(), fork.digest());
    }

    #[test]
    fn test_write_impl() {
        let mut hash = Md5::new();
        write!(hash, "Hello {}", "World").unwrap();
        hash.flush().unwrap();
        assert_eq!(hash.hexdigest(), "b10a8db164e0754105b7a99be72e3fe5");
    }

    #[test]
    fn test_length_beyond_32_bits() {
        let mut md5 = Md5::new();
        md5.set_length_bits(1 << 35);
        md5.update("abc");
        assert_eq!(md5.length_bits(), (1 << 35) + 24);
        assert_eq!(md5.hexdigest(), "daa1a373afb44d2540d6452013c23c82");

        let mut sha1 = Sha1::new();
        sha1.set_length_bits(1 << 35);
        sha1.update("abc");
        assert_eq!(sha1.hexdigest(), "8f9f19f7e61616973b7d7218ab3dd237973eb778");
    }

    #[test]
    fn test_length_counter_wraps() {
        let mut md5 = Md5::new();
        md5.set_length_bits(u64::MAX - 7);
        md5.update("a");
        assert_eq!(md5.length_bits(), 0);
        assert_eq!(md5.hexdigest(), "3a389d88a349727c6751e9acae0b0f37");

        let mut sha1 = Sha1::new();
        sha1.set_length_bits(u64::MAX - 7);
        sha1.update("a");
        assert_eq!(sha1.hexdigest(), "3b7c743a09e83cdf5d3f005cb72df6aa83cf1b27");
    }

    #[test]
    fn test_debug_output() {
        let mut hash = Sha1::new();
        hash.update("abc");
        let rendered = format!("{hash:?}");
        assert!(rendered.contains("SHA1"));
        assert!(rendered.contains("length_bits: 24"));
    }

    #[test]
    fn test_streaming_hasher_object() {
        let mut hasher: Box<dyn StreamingHasher> = Box::new(Md5::new());
        assert_eq!(hasher.update(b"abc"), 3);
        assert_eq!(hasher.bytes_processed(), 3);
        assert_eq!(hasher.algorithm(), HashAlgorithm::MD5);
        assert_eq!(hasher.digest().len(), 16);
        hasher.reset();
        assert_eq!(hasher.hexdigest(), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
