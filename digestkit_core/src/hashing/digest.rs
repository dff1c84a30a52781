//! Fixed-length raw digests

use super::hex;
use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Raw digest of `N` bytes
///
/// `{:x}` / `Display` render lowercase hex, `{:X}` uppercase. Parsing accepts
/// either case:
///
/// ```rust
/// use digestkit_core::Md5Digest;
///
/// let digest: Md5Digest = "D41D8CD98F00B204E9800998ECF8427E".parse().unwrap();
/// assert_eq!(digest.to_string(), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest<const N: usize>([u8; N]);

/// 16-byte MD5 digest
pub type Md5Digest = Digest<16>;

/// 20-byte SHA-1 digest
pub type Sha1Digest = Digest<20>;

impl<const N: usize> Digest<N> {
    /// Length of the digest in bytes
    pub const LENGTH: usize = N;

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn into_inner(self) -> [u8; N] {
        self.0
    }

    /// Lowercase hex, `2 * N` characters
    pub fn to_hex_lowercase(&self) -> String {
        hex::encode(&self.0)
    }

    /// Uppercase hex, `2 * N` characters
    pub fn to_hex_uppercase(&self) -> String {
        hex::encode_upper(&self.0)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.0
    }
}

impl<const N: usize> TryFrom<&str> for Digest<N> {
    type Error = ValidationError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut bytes = [0u8; N];
        hex::decode_into(text, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl<const N: usize> FromStr for Digest<N> {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::try_from(text)
    }
}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_lower(f, &self.0)
    }
}

impl<const N: usize> fmt::UpperHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_upper(f, &self.0)
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
