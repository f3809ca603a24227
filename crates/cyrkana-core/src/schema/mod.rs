//! Per-profile key-sequence → syllable schemas.
//!
//! A [`Schema`] keeps its entries next to the closure of all strict prefixes
//! of every entry key, so incremental matching is one hash lookup per
//! keystroke instead of a scan over the whole mapping.

mod config;

pub use config::parse_schema_json;

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::{BlobKind, EngineError};

#[derive(Debug, PartialEq, Eq)]
pub enum SchemaLookup<'a> {
    None,
    Prefix,
    Exact(&'a str),
    ExactAndPrefix(&'a str),
}

#[derive(Debug, Clone)]
pub struct Schema {
    id: String,
    entries: HashMap<String, String>,
    prefixes: HashSet<String>,
}

impl Schema {
    pub fn from_json(id: &str, blob: &str) -> Result<Self, EngineError> {
        let entries = parse_schema_json(id, blob)?;
        Self::from_entries(id, entries)
    }

    /// Build from `(sequence, syllable id)` pairs. Empty sequences, empty
    /// syllable ids and repeated sequences are `MalformedInput`; no pairs at
    /// all is `EmptySchema`.
    pub fn from_entries<I>(id: &str, entries: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let blob_kind = || BlobKind::Schema(id.to_string());
        let mut map = HashMap::new();
        for (sequence, syllable) in entries {
            if sequence.is_empty() {
                return Err(EngineError::malformed(blob_kind(), "empty key sequence"));
            }
            if syllable.is_empty() {
                return Err(EngineError::malformed(
                    blob_kind(),
                    format_args!("empty kana_key for {sequence:?}"),
                ));
            }
            match map.entry(sequence) {
                Entry::Occupied(e) => {
                    return Err(EngineError::malformed(
                        blob_kind(),
                        format_args!("duplicate key {:?}", e.key()),
                    ));
                }
                Entry::Vacant(e) => {
                    e.insert(syllable);
                }
            }
        }
        if map.is_empty() {
            return Err(EngineError::EmptySchema(id.to_string()));
        }

        let mut prefixes = HashSet::new();
        for sequence in map.keys() {
            prefixes.extend(strict_prefixes(sequence).map(str::to_string));
        }

        Ok(Self {
            id: id.to_string(),
            entries: map,
            prefixes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lookup(&self, sequence: &str) -> SchemaLookup<'_> {
        let is_prefix = self.prefixes.contains(sequence);
        match (self.entries.get(sequence), is_prefix) {
            (None, false) => SchemaLookup::None,
            (None, true) => SchemaLookup::Prefix,
            (Some(syllable), false) => SchemaLookup::Exact(syllable),
            (Some(syllable), true) => SchemaLookup::ExactAndPrefix(syllable),
        }
    }

    pub fn syllable(&self, sequence: &str) -> Option<&str> {
        self.entries.get(sequence).map(String::as_str)
    }

    /// True if `sequence` is a strict prefix of at least one entry key.
    pub fn is_prefix(&self, sequence: &str) -> bool {
        self.prefixes.contains(sequence)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}

/// Non-empty proper prefixes of `s`, cut at char boundaries.
pub(crate) fn strict_prefixes(s: &str) -> impl Iterator<Item = &str> {
    s.char_indices().skip(1).map(move |(i, _)| &s[..i])
}
