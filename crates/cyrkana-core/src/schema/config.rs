use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{BlobKind, EngineError};
use crate::json::UniqueMap;

#[derive(Deserialize)]
struct SchemaEntry {
    kana_key: String,
}

/// Decode a schema blob `{"КА": {"kana_key": "ka"}, ...}` into
/// key-sequence → syllable id. Repeated keys are rejected here; the
/// remaining entry checks happen in [`Schema::from_entries`](super::Schema::from_entries).
pub fn parse_schema_json(
    schema_id: &str,
    blob: &str,
) -> Result<HashMap<String, String>, EngineError> {
    let UniqueMap(raw) = serde_json::from_str::<UniqueMap<SchemaEntry>>(blob)
        .map_err(|e| EngineError::malformed(BlobKind::Schema(schema_id.to_string()), e))?;
    Ok(raw
        .into_iter()
        .map(|(sequence, entry)| (sequence, entry.kana_key))
        .collect())
}
