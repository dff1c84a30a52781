//! C-compatible type definitions for FFI

use crate::hashing::{Md5, Sha1};

/// FFI result codes matching the C header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestKitResult {
    Success = 0,
    ErrorInvalidParameter = 1,
    ErrorUnknown = 99,
}

/// MD5 state behind an opaque `DigestKitMd5 *`
pub type DigestKitMd5 = Md5;

/// SHA-1 state behind an opaque `DigestKitSha1 *`
pub type DigestKitSha1 = Sha1;

/// Live allocations handed out across the boundary
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestKitAllocationStats {
    /// Handles created and not yet dropped
    pub live_handles: u64,
    /// Digest buffers not yet passed to `digestkit_free_digest`
    pub live_digests: u64,
    /// Hex strings not yet passed to `digestkit_free_string`
    pub live_strings: u64,
    /// Handles created since process start
    pub total_handles: u64,
}
