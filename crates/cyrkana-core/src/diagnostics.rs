//! Consistency checks for asset authors.
//!
//! None of this runs on the keystroke path: a missing syllable is still only
//! reported by `convert_key` when the entry is actually typed.

use serde::Serialize;

use crate::kana::KanaTable;
use crate::profile::Profile;
use crate::schema::{strict_prefixes, Schema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingSyllable {
    pub sequence: String,
    pub syllable: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedEntry {
    pub sequence: String,
    /// Shorter entry that commits before `sequence` can be completed.
    pub shadowed_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub profile_id: String,
    pub schema_id: String,
    pub entry_count: usize,
    pub prefix_count: usize,
    pub missing_syllables: Vec<MissingSyllable>,
    pub shadowed_entries: Vec<ShadowedEntry>,
    /// Layout keys that occur in no entry sequence at all.
    pub unused_keys: Vec<String>,
}

impl SchemaReport {
    pub fn is_clean(&self) -> bool {
        self.missing_syllables.is_empty()
            && self.shadowed_entries.is_empty()
            && self.unused_keys.is_empty()
    }
}

pub fn check_schema(profile: &Profile, schema: &Schema, kana: &KanaTable) -> SchemaReport {
    let mut missing_syllables = Vec::new();
    let mut shadowed_entries = Vec::new();

    for (sequence, syllable) in schema.entries() {
        if kana.resolve(syllable).is_none() {
            missing_syllables.push(MissingSyllable {
                sequence: sequence.to_string(),
                syllable: syllable.to_string(),
            });
        }
        if let Some(prefix) = strict_prefixes(sequence).find(|p| schema.syllable(p).is_some()) {
            shadowed_entries.push(ShadowedEntry {
                sequence: sequence.to_string(),
                shadowed_by: prefix.to_string(),
            });
        }
    }

    let unused_keys = profile
        .keyboard_layout
        .iter()
        .filter(|key| !schema.entries().any(|(sequence, _)| sequence.contains(key.as_str())))
        .cloned()
        .collect();

    missing_syllables.sort_by(|a, b| a.sequence.cmp(&b.sequence));
    shadowed_entries.sort_by(|a, b| a.sequence.cmp(&b.sequence));

    SchemaReport {
        profile_id: profile.id.clone(),
        schema_id: schema.id().to_string(),
        entry_count: schema.len(),
        prefix_count: schema.prefix_count(),
        missing_syllables,
        shadowed_entries,
        unused_keys,
    }
}
