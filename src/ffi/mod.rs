//! FFI layer – C API for keyboard extensions that cannot use the UniFFI
//! bindings.
//!
//! Strings cross the boundary as NUL-terminated UTF-8. Strings returned by
//! the engine are owned by the caller and must be released with the matching
//! `*_free` function exactly once.

use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;

use cyrkana_core::EngineError;

pub mod engine;

#[cfg(test)]
mod tests;

pub use engine::*;

// --- Generic owned-pointer helpers for FFI resource management ---

/// Allocate a value on the heap and return a raw pointer suitable for FFI.
/// The caller is responsible for eventually passing the pointer to [`owned_drop`].
pub(crate) fn owned_new<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Free a heap-allocated value previously created by [`owned_new`].
/// No-op if `ptr` is null.
///
/// # Safety
/// `ptr` must have been produced by [`owned_new`] (i.e. `Box::into_raw`)
/// and must not have been freed already.
pub(crate) unsafe fn owned_drop<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Run an exported body, turning a panic into `on_panic` so unwinding never
/// crosses the C boundary.
pub(crate) fn ffi_catch<T>(on_panic: T, body: impl FnOnce() -> T) -> T {
    catch_unwind(AssertUnwindSafe(body)).unwrap_or(on_panic)
}

// ---------------------------------------------------------------------------
// FFI boilerplate-reduction macros (crate-internal)
// ---------------------------------------------------------------------------

/// Validate one or more FFI arguments and bind them as safe Rust values,
/// returning `$on_err` from the enclosing function or closure if any check
/// fails.
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert via [`cptr_to_str`] to `&str`, bind as `$name`. |
/// | `ref: $name = $ptr` | Null-check `$ptr: *const T`, dereference to `&T`, bind as `$name`. |
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; ref: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &*$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

/// Define an `extern "C"` function that closes (frees) a heap-allocated resource.
macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(ptr: *mut $T) {
            unsafe { $crate::ffi::owned_drop(ptr) };
        }
    };
}

pub(crate) use ffi_close;
pub(crate) use ffi_guard;

// --- Shared FFI types ---

/// Status code returned by every fallible C entry point.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyrStatus {
    Ok = 0,
    MalformedInput = 1,
    EmptySchema = 2,
    NotInitialized = 3,
    AlreadyInitialized = 4,
    ProfileNotFound = 5,
    SchemaNotLoaded = 6,
    MissingSyllableMapping = 7,
    /// Null pointer or non-UTF-8 argument.
    InvalidArgument = 100,
    Panic = 101,
}

impl From<&EngineError> for CyrStatus {
    fn from(e: &EngineError) -> Self {
        match e {
            EngineError::MalformedInput { .. } => CyrStatus::MalformedInput,
            EngineError::EmptySchema(_) => CyrStatus::EmptySchema,
            EngineError::NotInitialized => CyrStatus::NotInitialized,
            EngineError::AlreadyInitialized => CyrStatus::AlreadyInitialized,
            EngineError::ProfileNotFound(_) => CyrStatus::ProfileNotFound,
            EngineError::SchemaNotLoaded(_) => CyrStatus::SchemaNotLoaded,
            EngineError::MissingSyllableMapping { .. } => CyrStatus::MissingSyllableMapping,
        }
    }
}

impl<T> From<Result<T, EngineError>> for CyrStatus {
    fn from(r: Result<T, EngineError>) -> Self {
        match r {
            Ok(_) => CyrStatus::Ok,
            Err(ref e) => e.into(),
        }
    }
}

/// Owned UTF-8 string handed to the caller. `len` excludes the trailing NUL.
/// `data` is null when there is nothing to return.
#[repr(C)]
pub struct CyrString {
    pub data: *mut c_char,
    pub len: usize,
}

impl CyrString {
    pub(crate) fn null() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
        }
    }

    /// Strings with interior NULs cannot be represented and come back null.
    pub(crate) fn new(s: &str) -> Self {
        let Ok(cs) = CString::new(s) else {
            return Self::null();
        };
        let len = cs.as_bytes().len();
        Self {
            data: cs.into_raw(),
            len,
        }
    }

    /// # Safety
    /// `self` must come from [`CyrString::new`] and not have been freed.
    pub(crate) unsafe fn release(self) {
        if !self.data.is_null() {
            drop(CString::from_raw(self.data));
        }
    }
}

#[no_mangle]
pub extern "C" fn cyr_string_free(s: CyrString) {
    unsafe { s.release() };
}

// --- Top-level FFI functions ---

const VERSION_NUL: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Static, never freed.
#[no_mangle]
pub extern "C" fn cyr_version() -> *const c_char {
    VERSION_NUL.as_ptr().cast()
}

/// Static, human-readable description of a status code. Never freed.
#[no_mangle]
pub extern "C" fn cyr_status_message(status: i32) -> *const c_char {
    let msg = match status {
        0 => c"ok",
        1 => c"malformed input",
        2 => c"schema has no entries",
        3 => c"engine not initialized",
        4 => c"engine already initialized",
        5 => c"profile not found",
        6 => c"schema not loaded",
        7 => c"syllable missing from the kana table",
        100 => c"invalid argument",
        101 => c"internal panic",
        _ => c"unknown status",
    };
    msg.as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn cyr_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
