//! C API.
//!
//! Strings returned by this module are heap-allocated and must be released
//! with [`baht_engine_free_string`]. Functions return null on null or
//! non-UTF-8 arguments and on malformed amounts.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use tracing::debug;

use baht_core::settings::{init_custom, settings};
use baht_core::{spell, Reader};


/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand ownership of `s` to the caller. Null if `s` contains a NUL byte.
fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

fn global_reader() -> Reader {
    Reader::from_settings(settings())
}

#[no_mangle]
pub extern "C" fn baht_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Read an amount as Thai words using the global settings.
#[no_mangle]
pub extern "C" fn baht_engine_read(input: *const c_char) -> *mut c_char {
    let Some(raw) = (unsafe { cptr_to_str(input) }) else {
        return ptr::null_mut();
    };
    match global_reader().read(raw) {
        Ok(words) => into_c_string(words),
        Err(e) => {
            debug!(raw, error = %e, "baht_engine_read failed");
            ptr::null_mut()
        }
    }
}

/// Format an amount with the configured group and decimal marks.
#[no_mangle]
pub extern "C" fn baht_engine_format(input: *const c_char) -> *mut c_char {
    let Some(raw) = (unsafe { cptr_to_str(input) }) else {
        return ptr::null_mut();
    };
    match global_reader().format(raw) {
        Ok(formatted) => into_c_string(formatted),
        Err(e) => {
            debug!(raw, error = %e, "baht_engine_format failed");
            ptr::null_mut()
        }
    }
}

/// Spell a bare digit string.
#[no_mangle]
pub extern "C" fn baht_engine_spell(digits: *const c_char) -> *mut c_char {
    let Some(digits) = (unsafe { cptr_to_str(digits) }) else {
        return ptr::null_mut();
    };
    into_c_string(spell(digits))
}

/// Load a settings TOML file. Returns 0 on success, -1 on failure. Also
/// returns -1 once any read, format, or earlier load has fixed the settings.
#[no_mangle]
pub extern "C" fn baht_engine_settings_load(path: *const c_char) -> i32 {
    let Some(path) = (unsafe { cptr_to_str(path) }) else {
        return -1;
    };
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path, error = %e, "settings file unreadable");
            return -1;
        }
    };
    match init_custom(content) {
        Ok(()) => 0,
        Err(e) => {
            debug!(path, error = %e, "settings rejected");
            -1
        }
    }
}

/// Free a string returned by this library. No-op for null.
#[no_mangle]
pub extern "C" fn baht_engine_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe { drop(CString::from_raw(s)) };
    }
}

#[no_mangle]
pub extern "C" fn baht_engine_trace_init(log_dir: *const c_char) {
    if let Some(dir) = unsafe { cptr_to_str(log_dir) } {
        crate::trace_init::init_tracing(Path::new(dir));
    }
}
