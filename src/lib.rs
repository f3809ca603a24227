// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Host-facing boundary for the cyrkana engine: a handle-based C ABI
//! ([`ffi`]) and UniFFI bindings ([`api`]). All conversion logic lives in
//! `cyrkana_core`.

pub mod api;
pub mod ffi;
mod trace_init;

pub use cyrkana_core::{Action, ConversionResult, Engine, EngineError, Profile};

uniffi::setup_scaffolding!();
