//! Directory-backed asset provider.
//!
//! The engine only ever sees text blobs; this module is the collaborator that
//! reads them from disk, laid out per the `[assets]` settings.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cyrkana_core::settings::{settings, AssetSettings};
use cyrkana_core::{Engine, EngineError};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Reads profiles, the kana table and schemas from one directory.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
    layout: AssetSettings,
}

impl AssetDir {
    /// Asset directory using the global settings' file layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, settings().assets.clone())
    }

    pub fn with_layout(root: impl Into<PathBuf>, layout: AssetSettings) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profiles_json(&self) -> Result<String, AssetError> {
        self.read(&self.layout.profiles)
    }

    pub fn kana_json(&self) -> Result<String, AssetError> {
        self.read(&self.layout.kana_table)
    }

    pub fn schema_json(&self, schema_id: &str) -> Result<String, AssetError> {
        self.read(&self.layout.schema_file(schema_id))
    }

    /// Initialize `engine` from this directory without loading any schema.
    pub fn init(&self, engine: &Engine) -> Result<(), AssetError> {
        let profiles = self.profiles_json()?;
        let kana = self.kana_json()?;
        engine.init(&profiles, &kana)?;
        Ok(())
    }

    /// Load the schema `profile_id` refers to, if not already cached.
    pub fn load_schema_for(&self, engine: &Engine, profile_id: &str) -> Result<(), AssetError> {
        let schema_id = engine.profile(profile_id)?.input_schema_id;
        if engine.is_schema_loaded(&schema_id) {
            return Ok(());
        }
        let blob = self.schema_json(&schema_id)?;
        engine.load_schema(&schema_id, &blob)?;
        Ok(())
    }

    /// A fresh engine with every referenced schema loaded.
    pub fn open_engine(&self) -> Result<Engine, AssetError> {
        let engine = Engine::new();
        self.init(&engine)?;
        let mut seen = HashSet::new();
        for profile in engine.profiles()? {
            if seen.insert(profile.input_schema_id.clone()) {
                self.load_schema_for(&engine, &profile.id)?;
            }
        }
        Ok(engine)
    }

    fn read(&self, rel: &str) -> Result<String, AssetError> {
        let path = self.root.join(rel);
        debug!(path = %path.display(), "reading asset");
        fs::read_to_string(&path).map_err(|source| AssetError::Io { path, source })
    }
}
