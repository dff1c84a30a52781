//! Hashing operations on FFI handles

use crate::ffi::helpers::ffi_catch_panic;
use crate::ffi::memory::{ffi_allocate_digest, ffi_allocate_string};
use crate::ffi::types::{DigestKitMd5, DigestKitSha1};
use crate::hashing::HashState;
use crate::hashing::core::CompressionCore;
use std::ffi::c_char;
use std::{ptr, slice};

fn update_handle<C: CompressionCore>(
    handle: *mut HashState<C>,
    data: *const u8,
    len: usize,
) -> usize {
    ffi_catch_panic!(0, {
        if handle.is_null() || data.is_null() {
            return 0;
        }
        // SAFETY: caller guarantees a live handle and `len` readable bytes
        let (state, input) = unsafe { (&mut *handle, slice::from_raw_parts(data, len)) };
        state.update(input)
    })
}

fn digest_handle<C: CompressionCore>(handle: *const HashState<C>) -> *mut u8 {
    ffi_catch_panic!(ptr::null_mut(), {
        if handle.is_null() {
            return ptr::null_mut();
        }
        let state = unsafe { &*handle };
        ffi_allocate_digest(state.digest().as_ref())
    })
}

fn hexdigest_handle<C: CompressionCore>(handle: *const HashState<C>) -> *mut c_char {
    ffi_catch_panic!(ptr::null_mut(), {
        if handle.is_null() {
            return ptr::null_mut();
        }
        let state = unsafe { &*handle };
        ffi_allocate_string(&state.hexdigest())
    })
}

fn reset_handle<C: CompressionCore>(handle: *mut HashState<C>) {
    ffi_catch_panic!((), {
        if handle.is_null() {
            return;
        }
        unsafe { (*handle).reset() }
    })
}

/// Feed `len` bytes at `data` into an MD5 handle
///
/// Returns the number of bytes consumed, which is always `len` unless the
/// handle or data pointer is null (then 0).
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_md5_update(
    handle: *mut DigestKitMd5,
    data: *const u8,
    len: usize,
) -> usize {
    update_handle(handle, data, len)
}

/// MD5 of everything fed so far as a new 16-byte buffer
///
/// The handle stays usable. Free the buffer with `digestkit_free_digest(ptr, 16)`.
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_md5_digest(handle: *const DigestKitMd5) -> *mut u8 {
    digest_handle(handle)
}

/// MD5 of everything fed so far as a new 32-character lowercase hex string
///
/// Free the string with `digestkit_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_md5_hexdigest(handle: *const DigestKitMd5) -> *mut c_char {
    hexdigest_handle(handle)
}

/// Discard all input fed to an MD5 handle
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_md5_reset(handle: *mut DigestKitMd5) {
    reset_handle(handle)
}

/// Feed `len` bytes at `data` into a SHA-1 handle
///
/// Returns the number of bytes consumed, which is always `len` unless the
/// handle or data pointer is null (then 0).
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_sha1_update(
    handle: *mut DigestKitSha1,
    data: *const u8,
    len: usize,
) -> usize {
    update_handle(handle, data, len)
}

/// SHA-1 of everything fed so far as a new 20-byte buffer
///
/// The handle stays usable. Free the buffer with `digestkit_free_digest(ptr, 20)`.
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_sha1_digest(handle: *const DigestKitSha1) -> *mut u8 {
    digest_handle(handle)
}

/// SHA-1 of everything fed so far as a new 40-character lowercase hex string
///
/// Free the string with `digestkit_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_sha1_hexdigest(handle: *const DigestKitSha1) -> *mut c_char {
    hexdigest_handle(handle)
}

/// Discard all input fed to a SHA-1 handle
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_sha1_reset(handle: *mut DigestKitSha1) {
    reset_handle(handle)
}
