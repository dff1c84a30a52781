//! FFI (Foreign Function Interface) for the digestkit Core Library
//!
//! This module provides C-compatible bindings for external language consumption.
//! It implements the API declared in include/digestkit.h using an opaque handle
//! pattern: `digestkit_<alg>_new` boxes a fresh hash state and hands the raw
//! pointer to the caller, who passes it back to `update`, `digest`,
//! `hexdigest` and `reset` and finally releases it with `drop`.
//!
//! # Safety
//!
//! - Null handles and null data pointers are rejected; the call returns
//!   `0`/null and has no effect
//! - Using a handle after `drop`, dropping it twice or sharing one handle
//!   between threads without synchronisation is undefined behaviour
//! - Buffers from `*_digest` must be released with `digestkit_free_digest`,
//!   strings from `*_hexdigest` with `digestkit_free_string`
//!
//! No Rust panics can cross the FFI boundary. Each entry point catches them
//! and returns its neutral value instead.

#![allow(clippy::not_unsafe_ptr_arg_deref)]

mod helpers;

pub mod handles;
pub mod memory;
pub mod operations;
pub mod types;

pub use handles::*;
pub use memory::*;
pub use operations::*;
pub use types::*;

use std::ffi::c_char;

const VERSION_STRING: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
const ABI_VERSION: u32 = 1;

/// Get library version string
///
/// The returned pointer is static and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_get_version() -> *const c_char {
    VERSION_STRING.as_ptr().cast()
}

/// Get library ABI version
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_get_abi_version() -> u32 {
    ABI_VERSION
}
