//! Object-safe interfaces over the concrete hash states

use super::HashAlgorithm;

/// Describes one algorithm and manufactures hashers for it
pub trait HashAlgorithmImpl: Send + Sync {
    /// Unique identifier for this algorithm
    fn id(&self) -> &'static str;

    /// Display name for user interfaces
    fn display_name(&self) -> &'static str;

    /// Enum value for this algorithm
    fn algorithm(&self) -> HashAlgorithm;

    /// Raw digest length in bytes
    fn digest_length(&self) -> usize;

    /// Create a new streaming hasher instance
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Digest in-memory data in one call
    fn hash_bytes(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        hasher.digest()
    }
}

/// Incremental hasher behind a trait object
pub trait StreamingHasher: Send {
    /// Algorithm this hasher computes
    fn algorithm(&self) -> HashAlgorithm;

    /// Feed data; returns the number of bytes consumed (always all of them)
    fn update(&mut self, data: &[u8]) -> usize;

    /// Raw digest of everything fed so far, without ending the stream
    fn digest(&self) -> Vec<u8>;

    /// Lowercase hex digest of everything fed so far
    fn hexdigest(&self) -> String;

    /// Discard all input and start over
    fn reset(&mut self);

    /// Bytes fed since creation or the last reset
    fn bytes_processed(&self) -> u64;
}
