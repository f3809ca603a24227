use cyrkana_core::{Action, ConversionResult, EngineError, Profile};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// One variant per engine error, plus the settings/IO failures of the
/// top-level functions.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CyrError {
    #[error("malformed input: {msg}")]
    MalformedInput { msg: String },
    #[error("empty schema: {schema_id}")]
    EmptySchema { schema_id: String },
    #[error("engine not initialized")]
    NotInitialized,
    #[error("engine already initialized")]
    AlreadyInitialized,
    #[error("profile not found: {profile_id}")]
    ProfileNotFound { profile_id: String },
    #[error("schema not loaded: {schema_id}")]
    SchemaNotLoaded { schema_id: String },
    #[error("missing syllable mapping: {sequence} -> {syllable}")]
    MissingSyllableMapping { sequence: String, syllable: String },
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<EngineError> for CyrError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::MalformedInput { .. } => CyrError::MalformedInput { msg: e.to_string() },
            EngineError::EmptySchema(schema_id) => CyrError::EmptySchema { schema_id },
            EngineError::NotInitialized => CyrError::NotInitialized,
            EngineError::AlreadyInitialized => CyrError::AlreadyInitialized,
            EngineError::ProfileNotFound(profile_id) => CyrError::ProfileNotFound { profile_id },
            EngineError::SchemaNotLoaded(schema_id) => CyrError::SchemaNotLoaded { schema_id },
            EngineError::MissingSyllableMapping { sequence, syllable } => {
                CyrError::MissingSyllableMapping { sequence, syllable }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct CyrProfile {
    pub id: String,
    pub name_local: String,
    pub name_default: String,
    pub keyboard_layout: Vec<String>,
    pub input_schema_id: String,
}

impl From<Profile> for CyrProfile {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            name_local: p.name_local,
            name_default: p.name_default,
            keyboard_layout: p.keyboard_layout,
            input_schema_id: p.input_schema_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct CyrConversionResult {
    pub action: CyrAction,
    pub output: String,
    pub buffer: String,
}

impl From<ConversionResult> for CyrConversionResult {
    fn from(r: ConversionResult) -> Self {
        Self {
            action: r.action.into(),
            output: r.output,
            buffer: r.buffer,
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum CyrAction {
    Commit,
    Composing,
    Clear,
}

impl From<Action> for CyrAction {
    fn from(a: Action) -> Self {
        match a {
            Action::Commit => CyrAction::Commit,
            Action::Composing => CyrAction::Composing,
            Action::Clear => CyrAction::Clear,
        }
    }
}
