//! Global syllable-id → output text table, shared by every profile.

use std::collections::HashMap;

use crate::error::{BlobKind, EngineError};
use crate::json::UniqueMap;

#[derive(Debug, Clone, Default)]
pub struct KanaTable {
    map: HashMap<String, String>,
}

impl KanaTable {
    /// Parse a flat JSON object `{"ka": "か", ...}`.
    pub fn from_json(blob: &str) -> Result<Self, EngineError> {
        let UniqueMap(map) = serde_json::from_str::<UniqueMap<String>>(blob)
            .map_err(|e| EngineError::malformed(BlobKind::KanaTable, e))?;
        Self::from_map(map)
    }

    pub fn from_map(map: HashMap<String, String>) -> Result<Self, EngineError> {
        for (id, text) in &map {
            if id.is_empty() {
                return Err(EngineError::malformed(
                    BlobKind::KanaTable,
                    "empty syllable id",
                ));
            }
            if text.is_empty() {
                return Err(EngineError::malformed(
                    BlobKind::KanaTable,
                    format_args!("empty output for syllable {id:?}"),
                ));
            }
        }
        Ok(Self { map })
    }

    pub fn resolve(&self, syllable: &str) -> Option<&str> {
        self.map.get(syllable).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
