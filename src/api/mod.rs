//! UniFFI export layer: type-safe Swift/Kotlin bindings for the cyrkana engine.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod engine;
mod types;

pub use engine::CyrEngine;
pub use types::{CyrAction, CyrConversionResult, CyrError, CyrProfile};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    cyrkana_core::VERSION.to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), CyrError> {
    let content = std::fs::read_to_string(&path).map_err(|e| CyrError::Io {
        msg: format!("{path}: {e}"),
    })?;
    cyrkana_core::settings::init_custom(content)
        .map_err(|e| CyrError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    cyrkana_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
