use std::fmt;

/// Which text blob a parse failure came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobKind {
    Profiles,
    KanaTable,
    Schema(String),
}

impl fmt::Display for BlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobKind::Profiles => f.write_str("profiles"),
            BlobKind::KanaTable => f.write_str("kana table"),
            BlobKind::Schema(id) => write!(f, "schema {id}"),
        }
    }
}

/// Coarse classification of [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The supplied blob was rejected; nothing was committed.
    Input,
    /// The call sequence is wrong (not initialized, unknown profile, ...).
    Usage,
    /// Loaded data is inconsistent (schema vs. kana table).
    Configuration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("malformed {blob}: {reason}")]
    MalformedInput { blob: BlobKind, reason: String },

    #[error("schema {0} has no entries")]
    EmptySchema(String),

    #[error("engine not initialized")]
    NotInitialized,

    #[error("engine already initialized")]
    AlreadyInitialized,

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("schema not loaded: {0}")]
    SchemaNotLoaded(String),

    #[error("sequence {sequence:?} maps to syllable {syllable:?}, missing from the kana table")]
    MissingSyllableMapping { sequence: String, syllable: String },
}

impl EngineError {
    pub(crate) fn malformed(blob: BlobKind, reason: impl fmt::Display) -> Self {
        EngineError::MalformedInput {
            blob,
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::MalformedInput { .. } | EngineError::EmptySchema(_) => ErrorKind::Input,
            EngineError::NotInitialized
            | EngineError::AlreadyInitialized
            | EngineError::ProfileNotFound(_)
            | EngineError::SchemaNotLoaded(_) => ErrorKind::Usage,
            EngineError::MissingSyllableMapping { .. } => ErrorKind::Configuration,
        }
    }
}
