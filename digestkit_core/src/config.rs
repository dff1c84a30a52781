//! Configuration for stream and file hashing

use crate::{Result, error::ValidationError};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted read chunk
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Hashing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Bytes requested per read when hashing streams and files
    pub chunk_size: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            chunk_size: 64 * 1024, // 64KB base chunk size
        }
    }
}

impl HashConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self {
            chunk_size: 1024, // 1KB chunks for faster tests
        }
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// Environment variables use the `DIGESTKIT_` prefix, e.g.
    /// `DIGESTKIT_CHUNK_SIZE=4096`. A missing file is skipped.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path.filter(|path| path.exists()) {
            log::debug!("Loading configuration from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let config: Self = figment.merge(Env::prefixed("DIGESTKIT_")).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject chunk sizes the reader loop cannot use
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(
                ValidationError::invalid_configuration("chunk_size must be greater than 0").into(),
            );
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ValidationError::invalid_configuration(&format!(
                "chunk_size {} exceeds maximum of {MAX_CHUNK_SIZE}",
                self.chunk_size
            ))
            .into());
        }
        Ok(())
    }
}
