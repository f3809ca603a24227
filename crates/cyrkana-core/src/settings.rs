//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub profiles: ProfileSettings,
    pub assets: AssetSettings,
    pub trace: TraceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSettings {
    pub default: String,
}

/// File layout the asset provider reads blobs from, relative to its root.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSettings {
    pub profiles: String,
    pub kana_table: String,
    pub schema_dir: String,
    pub schema_extension: String,
}

impl AssetSettings {
    /// Relative path of the schema blob for `schema_id`.
    pub fn schema_file(&self, schema_id: &str) -> String {
        format!("{}/{}.{}", self.schema_dir, schema_id, self.schema_extension)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraceSettings {
    pub file_name: String,
    pub filter: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let required = [
        ("profiles.default", &s.profiles.default),
        ("assets.profiles", &s.assets.profiles),
        ("assets.kana_table", &s.assets.kana_table),
        ("assets.schema_dir", &s.assets.schema_dir),
        ("assets.schema_extension", &s.assets.schema_extension),
        ("trace.file_name", &s.trace.file_name),
        ("trace.filter", &s.trace.filter),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: field.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }
    if s.assets.schema_extension.starts_with('.') {
        return Err(SettingsError::InvalidValue {
            field: "assets.schema_extension".to_string(),
            reason: "write the extension without a leading dot".to_string(),
        });
    }
    Ok(())
}
