//! Keyboard profiles and the registry that owns them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{BlobKind, EngineError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub id: String,
    #[serde(alias = "name_ja")]
    pub name_local: String,
    #[serde(alias = "name_en")]
    pub name_default: String,
    #[serde(rename = "keyboardLayout")]
    pub keyboard_layout: Vec<String>,
    #[serde(rename = "inputSchemaId")]
    pub input_schema_id: String,
}

/// Profiles in blob order, indexed by id. Ids are unique.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
    by_id: HashMap<String, usize>,
}

impl ProfileRegistry {
    pub fn from_json(blob: &str) -> Result<Self, EngineError> {
        let profiles: Vec<Profile> = serde_json::from_str(blob)
            .map_err(|e| EngineError::malformed(BlobKind::Profiles, e))?;
        Self::from_profiles(profiles)
    }

    pub fn from_profiles(profiles: Vec<Profile>) -> Result<Self, EngineError> {
        let mut by_id = HashMap::with_capacity(profiles.len());
        for (idx, profile) in profiles.iter().enumerate() {
            if profile.id.is_empty() {
                return Err(EngineError::malformed(
                    BlobKind::Profiles,
                    format_args!("profile #{idx} has an empty id"),
                ));
            }
            if profile.input_schema_id.is_empty() {
                return Err(EngineError::malformed(
                    BlobKind::Profiles,
                    format_args!("profile {:?} has an empty inputSchemaId", profile.id),
                ));
            }
            if by_id.insert(profile.id.clone(), idx).is_some() {
                return Err(EngineError::malformed(
                    BlobKind::Profiles,
                    format_args!("duplicate profile id {:?}", profile.id),
                ));
            }
        }
        Ok(Self { profiles, by_id })
    }

    pub fn lookup(&self, id: &str) -> Option<&Profile> {
        self.by_id.get(id).map(|&idx| &self.profiles[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn first(&self) -> Option<&Profile> {
        self.profiles.first()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILES: &str = r##"[
        {
            "id": "rus_standard",
            "name_local": "ロシア語",
            "name_default": "Russian",
            "keyboardLayout": ["А", "К", "Я"],
            "inputSchemaId": "schema_rus_v1"
        },
        {
            "id": "srb_cyrillic",
            "name_ja": "セルビア語",
            "name_en": "Serbian",
            "keyboardLayout": ["Ђ", "Ћ"],
            "inputSchemaId": "schema_srb_v1",
            "accent": "#2255aa"
        }
    ]"##;

    #[test]
    fn parse_and_lookup() {
        let reg = ProfileRegistry::from_json(PROFILES).unwrap();
        assert_eq!(reg.len(), 2);
        let rus = reg.lookup("rus_standard").unwrap();
        assert_eq!(rus.name_default, "Russian");
        assert_eq!(rus.keyboard_layout, vec!["А", "К", "Я"]);
        assert_eq!(rus.input_schema_id, "schema_rus_v1");
        assert!(reg.lookup("ukr_cyrillic").is_none());
    }

    #[test]
    fn legacy_name_fields() {
        let reg = ProfileRegistry::from_json(PROFILES).unwrap();
        let srb = reg.lookup("srb_cyrillic").unwrap();
        assert_eq!(srb.name_local, "セルビア語");
        assert_eq!(srb.name_default, "Serbian");
    }

    #[test]
    fn keeps_blob_order() {
        let reg = ProfileRegistry::from_json(PROFILES).unwrap();
        let ids: Vec<&str> = reg.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["rus_standard", "srb_cyrillic"]);
        assert_eq!(reg.first().unwrap().id, "rus_standard");
    }

    #[test]
    fn serializes_boundary_field_names() {
        let reg = ProfileRegistry::from_json(PROFILES).unwrap();
        let json = serde_json::to_value(reg.lookup("srb_cyrillic").unwrap()).unwrap();
        assert_eq!(json["name_local"], "セルビア語");
        assert_eq!(json["inputSchemaId"], "schema_srb_v1");
        assert!(json.get("name_ja").is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let reg = ProfileRegistry::from_json(PROFILES).unwrap();
        let srb = reg.lookup("srb_cyrillic").unwrap();
        assert_eq!(srb.keyboard_layout, vec!["Ђ", "Ћ"]);
        let json = serde_json::to_value(srb).unwrap();
        assert!(json.get("accent").is_none());
    }

    #[test]
    fn empty_list_is_accepted() {
        assert!(ProfileRegistry::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn error_missing_field() {
        let err = ProfileRegistry::from_json(r#"[{"id": "x"}]"#).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MalformedInput {
                blob: BlobKind::Profiles,
                ..
            }
        ));
    }

    #[test]
    fn error_wrong_type() {
        let err = ProfileRegistry::from_json(
            r#"[{"id": 1, "name_local": "a", "name_default": "b",
                 "keyboardLayout": "АБ", "inputSchemaId": "s"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::MalformedInput { .. }));
    }

    #[test]
    fn error_duplicate_id() {
        let blob = r#"[
            {"id": "p", "name_local": "a", "name_default": "a", "keyboardLayout": [], "inputSchemaId": "s1"},
            {"id": "p", "name_local": "b", "name_default": "b", "keyboardLayout": [], "inputSchemaId": "s2"}
        ]"#;
        let err = ProfileRegistry::from_json(blob).unwrap_err();
        assert!(err.to_string().contains("duplicate profile id \"p\""), "{err}");
    }

    #[test]
    fn error_empty_schema_reference() {
        let blob = r#"[{"id": "p", "name_local": "a", "name_default": "a",
                        "keyboardLayout": [], "inputSchemaId": ""}]"#;
        let err = ProfileRegistry::from_json(blob).unwrap_err();
        assert!(err.to_string().contains("empty inputSchemaId"), "{err}");
    }
}
