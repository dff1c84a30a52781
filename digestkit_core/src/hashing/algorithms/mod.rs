//! Hash algorithm implementations

use super::registry::AlgorithmRegistry;

pub(crate) mod md5;
pub(crate) mod sha1;

pub use md5::Md5Core;
pub use sha1::Sha1Core;

/// Register all built-in algorithms with the registry
pub(crate) fn register_all(registry: &mut AlgorithmRegistry) {
    registry.register(md5::Md5Algorithm);
    registry.register(sha1::Sha1Algorithm);
}
