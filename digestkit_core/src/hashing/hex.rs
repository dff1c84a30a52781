//! Hexadecimal rendering and parsing of raw digests

use crate::error::ValidationError;
use hex::FromHexError;
use std::fmt;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Render bytes as lowercase hex, two characters per byte, high nibble first
pub fn encode(bytes: &[u8]) -> String {
    encode_with(bytes, LOWER)
}

/// Render bytes as uppercase hex
pub fn encode_upper(bytes: &[u8]) -> String {
    encode_with(bytes, UPPER)
}

fn encode_with(bytes: &[u8], table: &[u8; 16]) -> String {
    let mut text = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        text.push(table[usize::from(byte >> 4)] as char);
        text.push(table[usize::from(byte & 0x0F)] as char);
    }
    text
}

pub(crate) fn write_lower(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

pub(crate) fn write_upper(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{byte:02X}")?;
    }
    Ok(())
}

/// Parse hex text (either case) into `out`, which fixes the expected length
pub fn decode_into(text: &str, out: &mut [u8]) -> Result<(), ValidationError> {
    let expected = out.len() * 2;
    hex::decode_to_slice(text, out).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { index, .. } => invalid_at(text, index),
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            ValidationError::invalid_digest_length(text.chars().count(), expected)
        }
    })
}

fn invalid_at(text: &str, byte_index: usize) -> ValidationError {
    // Report the whole character when it is multi-byte
    let character = text
        .get(byte_index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ValidationError::invalid_hex_character(character, byte_index)
}
