//! Hash calculation functionality for the digestkit Core Library
//!
//! [`HashState`] is the streaming engine; [`HashCalculator`] drives it over
//! byte slices, readers, files and directory trees using the chunk size
//! from [`HashConfig`].

use crate::config::HashConfig;
use crate::{
    Error, Result,
    error::{IoError, ValidationError},
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use std::time::{Duration, Instant};
use walkdir::WalkDir;

mod algorithms;
mod buffer;
pub mod core;
mod digest;
pub mod hex;
mod registry;
mod state;
mod traits;

pub use algorithms::{Md5Core, Sha1Core};
pub use digest::{Digest, Md5Digest, Sha1Digest};
pub use registry::AlgorithmRegistry;
pub use state::{HashState, Md5, Sha1};
pub use traits::{HashAlgorithmImpl, StreamingHasher};

/// Hash algorithms supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5 (RFC 1321), 16-byte digest
    MD5,
    /// SHA-1 (FIPS 180-4), 20-byte digest
    SHA1,
}

impl HashAlgorithm {
    /// Raw digest length in bytes
    pub const fn digest_length(self) -> usize {
        match self {
            HashAlgorithm::MD5 => 16,
            HashAlgorithm::SHA1 => 20,
        }
    }

    /// Create a fresh streaming hasher for this algorithm
    pub fn create_hasher(self) -> Box<dyn StreamingHasher> {
        match self {
            HashAlgorithm::MD5 => Box::new(Md5::new()),
            HashAlgorithm::SHA1 => Box::new(Sha1::new()),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::MD5 => write!(f, "md5"),
            HashAlgorithm::SHA1 => write!(f, "sha1"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Accept the common "sha-1" spelling as well
        let name = if s.eq_ignore_ascii_case("sha-1") { "sha1" } else { s };
        AlgorithmRegistry::global()
            .get(name)
            .map(|algorithm| algorithm.algorithm())
            .ok_or_else(|| Error::Validation(ValidationError::unknown_algorithm(s)))
    }
}

/// MD5 of `data` in one call
pub fn md5<T: AsRef<[u8]>>(data: T) -> Md5Digest {
    let mut hash = Md5::new();
    hash.update(data);
    hash.digest()
}

/// SHA-1 of `data` in one call
pub fn sha1<T: AsRef<[u8]>>(data: T) -> Sha1Digest {
    let mut hash = Sha1::new();
    hash.update(data);
    hash.digest()
}

/// Result of hash calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    /// Raw digest bytes
    pub digest: Vec<u8>,
    /// Lowercase hex digest
    pub hash: String,
    pub input_size: u64,
    pub duration: Duration,
}

impl HashResult {
    fn from_hasher(hasher: &dyn StreamingHasher, duration: Duration) -> Self {
        Self {
            algorithm: hasher.algorithm(),
            digest: hasher.digest(),
            hash: hasher.hexdigest(),
            input_size: hasher.bytes_processed(),
            duration,
        }
    }
}

/// Drives hashers over slices, readers and files
#[derive(Debug, Clone, Default)]
pub struct HashCalculator {
    config: HashConfig,
}

impl HashCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a validated configuration
    pub fn with_config(config: HashConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hash an in-memory buffer
    pub fn calculate_bytes(&self, algorithm: HashAlgorithm, data: &[u8]) -> HashResult {
        let start = Instant::now();
        let mut hasher = algorithm.create_hasher();
        hasher.update(data);
        HashResult::from_hasher(hasher.as_ref(), start.elapsed())
    }

    /// Hash everything `reader` yields until end of stream
    pub fn calculate_reader<R: Read>(
        &self,
        algorithm: HashAlgorithm,
        reader: R,
    ) -> Result<HashResult> {
        let mut hasher = algorithm.create_hasher();
        let duration = self.drain_into(std::slice::from_mut(&mut hasher), reader)?;
        Ok(HashResult::from_hasher(hasher.as_ref(), duration))
    }

    /// Hash one stream with several algorithms in a single pass.
    ///
    /// Results come back in the order of `algorithms`.
    pub fn calculate_multiple<R: Read>(
        &self,
        algorithms: &[HashAlgorithm],
        reader: R,
    ) -> Result<Vec<HashResult>> {
        let mut hashers: Vec<_> = algorithms.iter().map(|a| a.create_hasher()).collect();
        let duration = self.drain_into(&mut hashers, reader)?;

        Ok(hashers
            .iter()
            .map(|hasher| HashResult::from_hasher(hasher.as_ref(), duration))
            .collect())
    }

    /// Feed `reader` to every hasher in `chunk_size` reads
    fn drain_into<R: Read>(
        &self,
        hashers: &mut [Box<dyn StreamingHasher>],
        mut reader: R,
    ) -> Result<Duration> {
        let start = Instant::now();
        let mut chunk = vec![0u8; self.config.chunk_size];
        let mut total: u64 = 0;

        debug!(
            "Hashing stream with {} hasher(s) in chunks of {} bytes",
            hashers.len(),
            self.config.chunk_size
        );

        loop {
            let read = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            for hasher in hashers.iter_mut() {
                hasher.update(&chunk[..read]);
            }
            total += read as u64;
            trace!("Hashed {read} bytes ({total} total)");
        }

        let duration = start.elapsed();
        debug!("Hashed {total} bytes in {duration:?}");
        Ok(duration)
    }

    /// Hash the contents of a file.
    ///
    /// A directory is hashed as described in
    /// [`calculate_directory`](Self::calculate_directory).
    pub fn calculate_file(&self, algorithm: HashAlgorithm, path: &Path) -> Result<HashResult> {
        debug!("Hashing {} with {algorithm}", path.display());
        let mut hasher = algorithm.create_hasher();
        let duration = self.hash_path(std::slice::from_mut(&mut hasher), path)?;
        Ok(HashResult::from_hasher(hasher.as_ref(), duration))
    }

    /// Hash the contents of a file with several algorithms in one read
    pub fn calculate_file_multiple(
        &self,
        algorithms: &[HashAlgorithm],
        path: &Path,
    ) -> Result<Vec<HashResult>> {
        debug!("Hashing {} with {algorithms:?}", path.display());
        let mut hashers: Vec<_> = algorithms.iter().map(|a| a.create_hasher()).collect();
        let duration = self.hash_path(&mut hashers, path)?;

        Ok(hashers
            .iter()
            .map(|hasher| HashResult::from_hasher(hasher.as_ref(), duration))
            .collect())
    }

    /// Hash every regular file under `root` as one continuous message.
    ///
    /// The tree is walked recursively with siblings in file-name order, so the
    /// digest equals that of the file contents concatenated in sorted path
    /// order. Names and directory structure contribute nothing, which makes an
    /// empty directory hash like an empty message. Symbolic links are
    /// followed; any entry that is neither a file nor a directory is an error.
    pub fn calculate_directory(&self, algorithm: HashAlgorithm, root: &Path) -> Result<HashResult> {
        debug!("Hashing directory {} with {algorithm}", root.display());
        let mut hasher = algorithm.create_hasher();
        let duration = self.hash_tree(std::slice::from_mut(&mut hasher), root)?;
        Ok(HashResult::from_hasher(hasher.as_ref(), duration))
    }

    fn hash_path(&self, hashers: &mut [Box<dyn StreamingHasher>], path: &Path) -> Result<Duration> {
        let metadata = fs::metadata(path).map_err(|err| path_error(err, path))?;
        if metadata.is_dir() {
            self.hash_tree(hashers, path)
        } else if metadata.is_file() {
            self.hash_one_file(hashers, path)
        } else {
            Err(Error::Io(IoError::unsupported_file_type(path)))
        }
    }

    fn hash_one_file(
        &self,
        hashers: &mut [Box<dyn StreamingHasher>],
        path: &Path,
    ) -> Result<Duration> {
        let file = File::open(path).map_err(|err| path_error(err, path))?;
        self.drain_into(hashers, file).map_err(|err| attach_path(err, path))
    }

    fn hash_tree(&self, hashers: &mut [Box<dyn StreamingHasher>], root: &Path) -> Result<Duration> {
        let start = Instant::now();
        let mut files = 0usize;

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|err| walk_error(err, root))?;
            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                return Err(Error::Io(IoError::unsupported_file_type(entry.path())));
            }

            trace!("Hashing {}", entry.path().display());
            self.hash_one_file(hashers, entry.path())?;
            files += 1;
        }

        let duration = start.elapsed();
        debug!("Hashed {files} file(s) under {} in {duration:?}", root.display());
        Ok(duration)
    }
}

fn path_error(err: io::Error, path: &Path) -> Error {
    let error = match err.kind() {
        io::ErrorKind::NotFound => IoError::file_not_found(path),
        _ => IoError::from_std(err).with_path(path),
    };
    Error::Io(error)
}

fn walk_error(err: walkdir::Error, root: &Path) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(source) => path_error(source, &path),
        // Symbolic link cycle
        None => Error::Io(
            IoError::from_std(io::Error::other("filesystem loop detected")).with_path(&path),
        ),
    }
}

fn attach_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Io(io_err) => Error::Io(io_err.with_path(path)),
        other => other,
    }
}
