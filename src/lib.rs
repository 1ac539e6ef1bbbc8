//! Thai-Baht amount reader with a C ABI for non-Rust hosts.
//!
//! The Rust API lives in [`baht_core`] and is re-exported here; [`ffi`]
//! exposes the same operations as `extern "C"` functions.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use baht_core::{
    format, group, normalize, read, read_with, settings, spell, AmountError, NormalizedAmount,
    Reader,
};
pub use trace_init::{init_tracing, DEFAULT_FILTER, TRACE_FILE};
