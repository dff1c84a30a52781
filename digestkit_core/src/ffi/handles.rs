//! Handle lifecycle for FFI
//!
//! A handle is a `Box<HashState<_>>` turned into a raw pointer. Creation and
//! release go through the allocation tracker.

use crate::ffi::helpers::ffi_catch_panic;
use crate::ffi::memory::ALLOCATION_TRACKER;
use crate::ffi::types::{DigestKitMd5, DigestKitSha1};
use crate::hashing::HashState;
use crate::hashing::core::CompressionCore;
use log::trace;
use std::ptr;

pub(crate) fn create_handle<C: CompressionCore>() -> *mut HashState<C> {
    let handle = Box::into_raw(Box::new(HashState::<C>::new()));
    ALLOCATION_TRACKER.handle_created();
    trace!("Created {} handle {handle:p}", C::ALGORITHM);
    handle
}

pub(crate) fn release_handle<C: CompressionCore>(handle: *mut HashState<C>) {
    if handle.is_null() {
        return;
    }
    // SAFETY: non-null handles come from `create_handle` and are released once
    drop(unsafe { Box::from_raw(handle) });
    ALLOCATION_TRACKER.handle_released();
    trace!("Released {} handle {handle:p}", C::ALGORITHM);
}

/// Create a new MD5 handle
///
/// Release it with `digestkit_md5_drop`.
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_md5_new() -> *mut DigestKitMd5 {
    ffi_catch_panic!(ptr::null_mut(), { create_handle() })
}

/// Release an MD5 handle; the handle is invalid afterwards
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_md5_drop(handle: *mut DigestKitMd5) {
    ffi_catch_panic!((), { release_handle(handle) })
}

/// Create a new SHA-1 handle
///
/// Release it with `digestkit_sha1_drop`.
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_sha1_new() -> *mut DigestKitSha1 {
    ffi_catch_panic!(ptr::null_mut(), { create_handle() })
}

/// Release a SHA-1 handle; the handle is invalid afterwards
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_sha1_drop(handle: *mut DigestKitSha1) {
    ffi_catch_panic!((), { release_handle(handle) })
}
