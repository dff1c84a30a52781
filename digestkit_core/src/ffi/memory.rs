//! Memory management and deallocation for FFI
//!
//! Every handle, digest buffer and hex string that crosses the boundary is
//! counted here so callers (and the test suite) can check for leaks.

use crate::ffi::helpers::ffi_catch_panic;
use crate::ffi::types::{DigestKitAllocationStats, DigestKitResult};
use std::ffi::{CString, c_char};
use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};

lazy_static::lazy_static! {
    pub(crate) static ref ALLOCATION_TRACKER: AllocationTracker = AllocationTracker::new();
}

/// Atomic counters for boundary allocations
pub(crate) struct AllocationTracker {
    live_handles: AtomicU64,
    live_digests: AtomicU64,
    live_strings: AtomicU64,
    total_handles: AtomicU64,
}

impl AllocationTracker {
    fn new() -> Self {
        Self {
            live_handles: AtomicU64::new(0),
            live_digests: AtomicU64::new(0),
            live_strings: AtomicU64::new(0),
            total_handles: AtomicU64::new(0),
        }
    }

    pub(crate) fn handle_created(&self) {
        self.live_handles.fetch_add(1, Ordering::AcqRel);
        self.total_handles.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn handle_released(&self) {
        self.live_handles.fetch_sub(1, Ordering::AcqRel);
    }

    fn digest_allocated(&self) {
        self.live_digests.fetch_add(1, Ordering::AcqRel);
    }

    fn digest_released(&self) {
        self.live_digests.fetch_sub(1, Ordering::AcqRel);
    }

    fn string_allocated(&self) {
        self.live_strings.fetch_add(1, Ordering::AcqRel);
    }

    fn string_released(&self) {
        self.live_strings.fetch_sub(1, Ordering::AcqRel);
    }

    pub(crate) fn snapshot(&self) -> DigestKitAllocationStats {
        DigestKitAllocationStats {
            live_handles: self.live_handles.load(Ordering::Acquire),
            live_digests: self.live_digests.load(Ordering::Acquire),
            live_strings: self.live_strings.load(Ordering::Acquire),
            total_handles: self.total_handles.load(Ordering::Relaxed),
        }
    }
}

/// Copy `bytes` into a caller-owned buffer of exactly `bytes.len()` bytes
pub(crate) fn ffi_allocate_digest(bytes: &[u8]) -> *mut u8 {
    let buffer: Box<[u8]> = bytes.into();
    ALLOCATION_TRACKER.digest_allocated();
    Box::into_raw(buffer).cast()
}

/// Copy `s` into a caller-owned NUL-terminated string
///
/// Returns null if `s` contains an interior NUL.
pub(crate) fn ffi_allocate_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => {
            ALLOCATION_TRACKER.string_allocated();
            c_string.into_raw()
        }
        Err(_) => ptr::null_mut(),
    }
}

/// Free a digest buffer returned by `digestkit_md5_digest` or
/// `digestkit_sha1_digest`
///
/// `len` must be the digest length of the algorithm that produced it
/// (16 for MD5, 20 for SHA-1).
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_free_digest(digest: *mut u8, len: usize) {
    ffi_catch_panic!((), {
        if digest.is_null() {
            return;
        }
        // SAFETY: the buffer came from `ffi_allocate_digest` with this length
        drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(digest, len)) });
        ALLOCATION_TRACKER.digest_released();
    })
}

/// Free a string returned by `digestkit_md5_hexdigest` or
/// `digestkit_sha1_hexdigest`
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_free_string(string: *mut c_char) {
    ffi_catch_panic!((), {
        if string.is_null() {
            return;
        }
        // SAFETY: the string came from `ffi_allocate_string`
        drop(unsafe { CString::from_raw(string) });
        ALLOCATION_TRACKER.string_released();
    })
}

/// Get current allocation counts
#[unsafe(no_mangle)]
pub extern "C" fn digestkit_get_allocation_stats(
    stats: *mut DigestKitAllocationStats,
) -> DigestKitResult {
    ffi_catch_panic!(DigestKitResult::ErrorUnknown, {
        if stats.is_null() {
            return DigestKitResult::ErrorInvalidParameter;
        }

        unsafe {
            *stats = ALLOCATION_TRACKER.snapshot();
        }

        DigestKitResult::Success
    })
}
