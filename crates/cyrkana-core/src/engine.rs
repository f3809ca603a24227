//! Engine context: one-way lifecycle, profile registry, kana table and the
//! schema cache behind a single reader-writer lock.
//!
//! Writers (`init`, `load_schema` on a cache miss) parse and publish while
//! holding the write lock, so concurrent callers never parse the same blob
//! twice and readers only ever see fully built structures.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::convert::{convert_key, ConversionResult};
use crate::diagnostics::{check_schema, SchemaReport};
use crate::error::EngineError;
use crate::kana::KanaTable;
use crate::profile::{Profile, ProfileRegistry};
use crate::schema::Schema;
use crate::settings::settings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

enum EngineState {
    Uninitialized,
    Initialized(Loaded),
}

struct Loaded {
    profiles: ProfileRegistry,
    kana: KanaTable,
    schemas: HashMap<String, Arc<Schema>>,
}

impl Loaded {
    fn profile(&self, id: &str) -> Result<&Profile, EngineError> {
        self.profiles
            .lookup(id)
            .ok_or_else(|| EngineError::ProfileNotFound(id.to_string()))
    }

    fn schema_for(&self, profile: &Profile) -> Result<&Schema, EngineError> {
        self.schemas
            .get(&profile.input_schema_id)
            .map(Arc::as_ref)
            .ok_or_else(|| EngineError::SchemaNotLoaded(profile.input_schema_id.clone()))
    }
}

pub struct Engine {
    state: RwLock<EngineState>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Engine");
        match &*self.read() {
            EngineState::Uninitialized => s.field("initialized", &false),
            EngineState::Initialized(loaded) => s
                .field("initialized", &true)
                .field("profiles", &loaded.profiles.len())
                .field("schemas", &loaded.schemas.len()),
        };
        s.finish()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState::Uninitialized),
        }
    }

    // State is only replaced wholesale after a successful parse, so a guard
    // recovered from a poisoned lock is always consistent.
    fn read(&self) -> RwLockReadGuard<'_, EngineState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_loaded<T>(
        &self,
        f: impl FnOnce(&Loaded) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        match &*self.read() {
            EngineState::Uninitialized => Err(EngineError::NotInitialized),
            EngineState::Initialized(loaded) => f(loaded),
        }
    }

    /// Load the profile registry and kana table. Succeeds at most once; a
    /// failed attempt leaves the engine uninitialized and may be retried.
    pub fn init(&self, profiles_json: &str, kana_json: &str) -> Result<(), EngineError> {
        let mut state = self.write();
        if matches!(*state, EngineState::Initialized(_)) {
            return Err(EngineError::AlreadyInitialized);
        }

        let profiles = ProfileRegistry::from_json(profiles_json).inspect_err(|e| {
            warn!(error = %e, "init rejected");
        })?;
        let kana = KanaTable::from_json(kana_json).inspect_err(|e| {
            warn!(error = %e, "init rejected");
        })?;

        if profiles.is_empty() {
            warn!("initialized with no profiles");
        }
        if kana.is_empty() {
            warn!("initialized with an empty kana table");
        }
        info!(
            profiles = profiles.len(),
            syllables = kana.len(),
            "engine initialized"
        );

        *state = EngineState::Initialized(Loaded {
            profiles,
            kana,
            schemas: HashMap::new(),
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        matches!(*self.read(), EngineState::Initialized(_))
    }

    /// Parse and cache the schema for `schema_id`. A cached id is never
    /// reparsed: later blobs for the same id are ignored and report success.
    pub fn load_schema(&self, schema_id: &str, schema_json: &str) -> Result<(), EngineError> {
        if self.with_loaded(|loaded| Ok(loaded.schemas.contains_key(schema_id)))? {
            debug!(schema_id, "schema already cached");
            return Ok(());
        }

        let mut state = self.write();
        let EngineState::Initialized(loaded) = &mut *state else {
            return Err(EngineError::NotInitialized);
        };
        // Another loader may have published while we waited for the lock.
        if loaded.schemas.contains_key(schema_id) {
            debug!(schema_id, "schema published by a concurrent loader");
            return Ok(());
        }

        let schema = Schema::from_json(schema_id, schema_json).inspect_err(|e| {
            warn!(schema_id, error = %e, "schema rejected");
        })?;
        info!(
            schema_id,
            entries = schema.len(),
            prefixes = schema.prefix_count(),
            "schema loaded"
        );
        loaded
            .schemas
            .insert(schema_id.to_string(), Arc::new(schema));
        Ok(())
    }

    pub fn is_schema_loaded(&self, schema_id: &str) -> bool {
        self.with_loaded(|loaded| Ok(loaded.schemas.contains_key(schema_id)))
            .unwrap_or(false)
    }

    /// Convert one keystroke for `profile_id`. `buffer` is the buffer the
    /// previous call returned (or empty).
    pub fn process_key(
        &self,
        profile_id: &str,
        buffer: &str,
        key: &str,
    ) -> Result<ConversionResult, EngineError> {
        self.with_loaded(|loaded| {
            let profile = loaded.profile(profile_id)?;
            let schema = loaded.schema_for(profile)?;
            convert_key(schema, &loaded.kana, buffer, key)
        })
    }

    /// All profiles, in the order the profiles blob listed them.
    pub fn profiles(&self) -> Result<Vec<Profile>, EngineError> {
        self.with_loaded(|loaded| Ok(loaded.profiles.iter().cloned().collect()))
    }

    pub fn profile(&self, profile_id: &str) -> Result<Profile, EngineError> {
        self.with_loaded(|loaded| loaded.profile(profile_id).cloned())
    }

    /// The configured default profile if registered, else the first one.
    pub fn default_profile(&self) -> Result<Profile, EngineError> {
        let preferred = &settings().profiles.default;
        self.with_loaded(|loaded| {
            loaded
                .profiles
                .lookup(preferred)
                .or_else(|| loaded.profiles.first())
                .cloned()
                .ok_or_else(|| EngineError::ProfileNotFound(preferred.clone()))
        })
    }

    /// Consistency report for the schema `profile_id` uses.
    pub fn diagnose(&self, profile_id: &str) -> Result<SchemaReport, EngineError> {
        self.with_loaded(|loaded| {
            let profile = loaded.profile(profile_id)?;
            let schema = loaded.schema_for(profile)?;
            Ok(check_schema(profile, schema, &loaded.kana))
        })
    }
}
