//! Incremental Cyrillic → kana conversion.
//!
//! The caller owns the composition buffer: each call receives the buffer the
//! previous call returned and hands back the next one. Nothing is stored
//! between keystrokes.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::kana::KanaTable;
use crate::schema::{Schema, SchemaLookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Commit,
    Composing,
    Clear,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Commit => "commit",
            Action::Composing => "composing",
            Action::Clear => "clear",
        }
    }
}

/// Outcome of one keystroke. `output` is non-empty only for `Commit`,
/// `buffer` only for `Composing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub action: Action,
    pub output: String,
    pub buffer: String,
}

impl ConversionResult {
    pub fn commit(output: String) -> Self {
        Self {
            action: Action::Commit,
            output,
            buffer: String::new(),
        }
    }

    pub fn composing(buffer: String) -> Self {
        Self {
            action: Action::Composing,
            output: String::new(),
            buffer,
        }
    }

    pub fn clear() -> Self {
        Self {
            action: Action::Clear,
            output: String::new(),
            buffer: String::new(),
        }
    }
}

/// Feed one keystroke through `schema`.
///
/// `buffer ++ key` is tried first; if it neither matches nor extends any
/// entry, `key` alone is tried as a fresh start and the old buffer is
/// dropped. If that fails too the result is `Clear`.
pub fn convert_key(
    schema: &Schema,
    kana: &KanaTable,
    buffer: &str,
    key: &str,
) -> Result<ConversionResult, EngineError> {
    let mut candidate = String::with_capacity(buffer.len() + key.len());
    candidate.push_str(buffer);
    candidate.push_str(key);

    if candidate.is_empty() {
        return Ok(ConversionResult::clear());
    }

    if let Some(result) = match_sequence(schema, kana, candidate)? {
        return Ok(result);
    }

    // Dead end: restart from the key alone. Redundant when the buffer was empty.
    if !buffer.is_empty() {
        if let Some(result) = match_sequence(schema, kana, key.to_string())? {
            return Ok(result);
        }
    }

    Ok(ConversionResult::clear())
}

fn match_sequence(
    schema: &Schema,
    kana: &KanaTable,
    sequence: String,
) -> Result<Option<ConversionResult>, EngineError> {
    match schema.lookup(&sequence) {
        SchemaLookup::Exact(syllable) | SchemaLookup::ExactAndPrefix(syllable) => {
            let text = kana
                .resolve(syllable)
                .ok_or_else(|| EngineError::MissingSyllableMapping {
                    sequence: sequence.clone(),
                    syllable: syllable.to_string(),
                })?;
            Ok(Some(ConversionResult::commit(text.to_string())))
        }
        SchemaLookup::Prefix => Ok(Some(ConversionResult::composing(sequence))),
        SchemaLookup::None => Ok(None),
    }
}
