//! Panic containment for FFI entry points

/// Run an FFI body, returning `$fallback` if it panics
///
/// The body runs inside a closure, so `return` leaves the body only.
macro_rules! ffi_catch_panic {
    ($fallback:expr, $($body:tt)*) => {{
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| { $($body)* })) {
            Ok(result) => result,
            Err(_) => {
                log::warn!("Panic caught at FFI boundary");
                $fallback
            }
        }
    }};
}

pub(crate) use ffi_catch_panic;
