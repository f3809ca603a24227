//! Cyrillic → kana conversion engine.
//!
//! Profiles map a Cyrillic keyboard layout onto a schema of key sequences;
//! schemas map sequences onto syllable ids; one shared kana table maps
//! syllable ids onto output text. [`Engine`] ties them together behind a
//! one-way `Uninitialized -> Initialized` lifecycle.

pub mod convert;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub(crate) mod json;
pub mod kana;
pub mod profile;
pub mod schema;
pub mod settings;

#[cfg(test)]
pub(crate) mod testutil;

pub use convert::{convert_key, Action, ConversionResult};
pub use diagnostics::SchemaReport;
pub use engine::{Engine, VERSION};
pub use error::{BlobKind, EngineError, ErrorKind};
pub use kana::KanaTable;
pub use profile::{Profile, ProfileRegistry};
pub use schema::{Schema, SchemaLookup};
