//! digestkit Core Library
//!
//! Incremental MD5 and SHA-1 digest engine. Data can be fed in arbitrarily
//! sized chunks and the digest queried at any point without disturbing the
//! running state. The [`ffi`] module exposes the engine to C callers through
//! opaque handles.

pub mod config;
pub mod error;
pub mod ffi;
pub mod hashing;

// Re-export main types
pub use config::HashConfig;
pub use error::{Error, Result};
pub use hashing::{
    AlgorithmRegistry, Digest, HashAlgorithm, HashCalculator, HashResult, HashState, Md5,
    Md5Digest, Sha1, Sha1Digest, StreamingHasher, md5, sha1,
};
