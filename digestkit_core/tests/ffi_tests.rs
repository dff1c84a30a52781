//! FFI boundary tests
//!
//! The allocation tracker is process-global: tests that compare its
//! counters are `serial`, every other test is `parallel` so it never
//! overlaps them.

use digestkit_core::ffi::*;
use digestkit_core::{md5, sha1};
use digestkit_test_utils::{MessageBuilder, known_answers};
use serial_test::{parallel, serial};
use std::ffi::{CStr, c_char};
use std::ptr;

fn stats() -> DigestKitAllocationStats {
    let mut stats = DigestKitAllocationStats::default();
    assert_eq!(
        digestkit_get_allocation_stats(&mut stats),
        DigestKitResult::Success
    );
    stats
}

/// Copy and free a hex string returned by the library
fn take_string(ptr: *mut c_char) -> String {
    assert!(!ptr.is_null());
    let value = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned();
    digestkit_free_string(ptr);
    value
}

/// Copy and free a digest buffer returned by the library
fn take_digest(ptr: *mut u8, len: usize) -> Vec<u8> {
    assert!(!ptr.is_null());
    let value = unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec();
    digestkit_free_digest(ptr, len);
    value
}

#[test]
#[parallel]
fn test_md5_lifecycle() {
    let handle = digestkit_md5_new();
    assert!(!handle.is_null());

    let message = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(
        digestkit_md5_update(handle, message.as_ptr(), message.len()),
        message.len()
    );

    assert_eq!(
        take_string(digestkit_md5_hexdigest(handle)),
        "9e107d9d372bb6826bd81d3542a419d6"
    );
    assert_eq!(
        take_digest(digestkit_md5_digest(handle), 16),
        md5(message).as_ref()
    );

    digestkit_md5_drop(handle);
}

#[test]
#[parallel]
fn test_sha1_lifecycle() {
    let handle = digestkit_sha1_new();
    let message = b"abc";
    digestkit_sha1_update(handle, message.as_ptr(), message.len());

    assert_eq!(
        take_string(digestkit_sha1_hexdigest(handle)),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    assert_eq!(
        take_digest(digestkit_sha1_digest(handle), 20),
        sha1(message).as_ref()
    );

    digestkit_sha1_drop(handle);
}

#[test]
#[parallel]
fn test_known_answers_through_boundary() {
    for vector in known_answers() {
        let md5_handle = digestkit_md5_new();
        let sha1_handle = digestkit_sha1_new();

        for chunk in vector.message.chunks(13) {
            digestkit_md5_update(md5_handle, chunk.as_ptr(), chunk.len());
            digestkit_sha1_update(sha1_handle, chunk.as_ptr(), chunk.len());
        }

        assert_eq!(take_string(digestkit_md5_hexdigest(md5_handle)), vector.md5);
        assert_eq!(take_string(digestkit_sha1_hexdigest(sha1_handle)), vector.sha1);

        digestkit_md5_drop(md5_handle);
        digestkit_sha1_drop(sha1_handle);
    }
}

#[test]
#[parallel]
fn test_digest_then_continue() {
    let handle = digestkit_sha1_new();
    digestkit_sha1_update(handle, b"ab".as_ptr(), 2);
    let partial = take_string(digestkit_sha1_hexdigest(handle));
    assert_eq!(partial, sha1("ab").to_string());

    digestkit_sha1_update(handle, b"c".as_ptr(), 1);
    assert_eq!(
        take_string(digestkit_sha1_hexdigest(handle)),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    digestkit_sha1_drop(handle);
}

#[test]
#[parallel]
fn test_empty_update_with_null_data() {
    let handle = digestkit_md5_new();
    assert_eq!(digestkit_md5_update(handle, ptr::null(), 0), 0);
    assert_eq!(
        take_string(digestkit_md5_hexdigest(handle)),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    digestkit_md5_drop(handle);
}

#[test]
#[parallel]
fn test_null_handles_are_ignored() {
    assert_eq!(digestkit_md5_update(ptr::null_mut(), b"x".as_ptr(), 1), 0);
    assert_eq!(digestkit_sha1_update(ptr::null_mut(), b"x".as_ptr(), 1), 0);
    assert!(digestkit_md5_digest(ptr::null()).is_null());
    assert!(digestkit_sha1_digest(ptr::null()).is_null());
    assert!(digestkit_md5_hexdigest(ptr::null()).is_null());
    assert!(digestkit_sha1_hexdigest(ptr::null()).is_null());
    digestkit_md5_reset(ptr::null_mut());
    digestkit_sha1_reset(ptr::null_mut());
    digestkit_md5_drop(ptr::null_mut());
    digestkit_sha1_drop(ptr::null_mut());
}

#[test]
#[parallel]
fn test_reset_through_boundary() {
    let handle = digestkit_sha1_new();
    let junk = MessageBuilder::new().pseudo_random(200, 3).build();
    digestkit_sha1_update(handle, junk.as_ptr(), junk.len());
    digestkit_sha1_reset(handle);

    assert_eq!(
        take_string(digestkit_sha1_hexdigest(handle)),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    digestkit_sha1_drop(handle);
}

#[test]
#[parallel]
fn test_version_information() {
    let version = unsafe { CStr::from_ptr(digestkit_get_version()) };
    assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    assert_eq!(digestkit_get_abi_version(), 1);
}

#[test]
#[serial]
fn test_allocation_tracking_balances() {
    let before = stats();

    let md5_handle = digestkit_md5_new();
    let sha1_handle = digestkit_sha1_new();
    let digest = digestkit_md5_digest(md5_handle);
    let hex = digestkit_sha1_hexdigest(sha1_handle);

    let during = stats();
    assert_eq!(during.live_handles, before.live_handles + 2);
    assert_eq!(during.live_digests, before.live_digests + 1);
    assert_eq!(during.live_strings, before.live_strings + 1);
    assert!(during.total_handles >= before.total_handles + 2);

    digestkit_free_digest(digest, 16);
    digestkit_free_string(hex);
    digestkit_md5_drop(md5_handle);
    digestkit_sha1_drop(sha1_handle);

    let after = stats();
    assert_eq!(after.live_handles, before.live_handles);
    assert_eq!(after.live_digests, before.live_digests);
    assert_eq!(after.live_strings, before.live_strings);
}

#[test]
#[serial]
fn test_many_handles_released() {
    let before = stats();
    let handles: Vec<_> = (0..100).map(|_| digestkit_md5_new()).collect();
    assert_eq!(stats().live_handles, before.live_handles + 100);

    for handle in handles {
        digestkit_md5_drop(handle);
    }
    assert_eq!(stats().live_handles, before.live_handles);
}

#[test]
#[parallel]
fn test_stats_null_pointer() {
    assert_eq!(
        digestkit_get_allocation_stats(ptr::null_mut()),
        DigestKitResult::ErrorInvalidParameter
    );
}
