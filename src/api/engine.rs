use std::sync::Arc;

use cyrkana_core::Engine;

use super::{CyrConversionResult, CyrError, CyrProfile};

/// Shared engine handle. Every method may be called from any thread.
#[derive(uniffi::Object)]
pub struct CyrEngine {
    inner: Engine,
}

#[uniffi::export]
impl CyrEngine {
    #[uniffi::constructor]
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Engine::new(),
        })
    }

    fn init(&self, profiles_json: String, kana_json: String) -> Result<(), CyrError> {
        Ok(self.inner.init(&profiles_json, &kana_json)?)
    }

    fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    fn load_schema(&self, schema_id: String, schema_json: String) -> Result<(), CyrError> {
        Ok(self.inner.load_schema(&schema_id, &schema_json)?)
    }

    fn is_schema_loaded(&self, schema_id: String) -> bool {
        self.inner.is_schema_loaded(&schema_id)
    }

    fn process_key(
        &self,
        profile_id: String,
        buffer: String,
        key: String,
    ) -> Result<CyrConversionResult, CyrError> {
        let result = self.inner.process_key(&profile_id, &buffer, &key)?;
        Ok(result.into())
    }

    fn profiles(&self) -> Result<Vec<CyrProfile>, CyrError> {
        let profiles = self.inner.profiles()?;
        Ok(profiles.into_iter().map(CyrProfile::from).collect())
    }

    fn profile(&self, profile_id: String) -> Result<CyrProfile, CyrError> {
        Ok(self.inner.profile(&profile_id)?.into())
    }

    fn default_profile(&self) -> Result<CyrProfile, CyrError> {
        Ok(self.inner.default_profile()?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CyrAction;

    const PROFILES: &str = r#"[{"id":"rus_test","name_ja":"ロシア語","name_en":"Russian",
        "keyboardLayout":["К","Я"],"inputSchemaId":"schema_test"}]"#;
    const KANA: &str = r#"{"kya":"きゃ"}"#;
    const SCHEMA: &str = r#"{"КЯ":{"kana_key":"kya"}}"#;

    #[test]
    fn test_round_trip_through_object() {
        let engine = CyrEngine::new();
        assert!(matches!(
            engine.process_key("rus_test".into(), String::new(), "К".into()),
            Err(CyrError::NotInitialized)
        ));

        engine.init(PROFILES.into(), KANA.into()).unwrap();
        assert!(engine.is_initialized());
        assert!(matches!(
            engine.init(PROFILES.into(), KANA.into()),
            Err(CyrError::AlreadyInitialized)
        ));
        assert!(matches!(
            engine.process_key("rus_test".into(), String::new(), "К".into()),
            Err(CyrError::SchemaNotLoaded { schema_id }) if schema_id == "schema_test"
        ));

        engine
            .load_schema("schema_test".into(), SCHEMA.into())
            .unwrap();
        assert!(engine.is_schema_loaded("schema_test".into()));

        let r1 = engine
            .process_key("rus_test".into(), String::new(), "К".into())
            .unwrap();
        assert_eq!(r1.action, CyrAction::Composing);
        let r2 = engine.process_key("rus_test".into(), r1.buffer, "Я".into()).unwrap();
        assert_eq!(r2.action, CyrAction::Commit);
        assert_eq!(r2.output, "きゃ");
        assert_eq!(r2.buffer, "");
    }

    #[test]
    fn test_profile_records() {
        let engine = CyrEngine::new();
        engine.init(PROFILES.into(), KANA.into()).unwrap();

        let profiles = engine.profiles().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name_local, "ロシア語");
        assert_eq!(profiles[0].name_default, "Russian");
        assert_eq!(profiles[0].keyboard_layout, vec!["К", "Я"]);

        // "rus_standard" is not registered, so the first profile is the default.
        assert_eq!(engine.default_profile().unwrap().id, "rus_test");
        assert!(matches!(
            engine.profile("nope".into()),
            Err(CyrError::ProfileNotFound { profile_id }) if profile_id == "nope"
        ));
    }

    #[test]
    fn test_error_mapping() {
        let engine = CyrEngine::new();
        engine.init(PROFILES.into(), KANA.into()).unwrap();
        let err = engine
            .load_schema("schema_test".into(), "{".into())
            .unwrap_err();
        assert!(matches!(err, CyrError::MalformedInput { ref msg } if msg.contains("schema schema_test")));
        assert!(matches!(
            engine.load_schema("schema_test".into(), "{}".into()),
            Err(CyrError::EmptySchema { .. })
        ));
    }
}
