use std::collections::HashMap;

use serde_json::Value;

use crate::config::A11yConfig;
use crate::error::{A11yError, StorageError};
use crate::prefs::PreferenceState;

/// Slot used when no config overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "tribal.a11y.prefs";

/// Minimal string key/value storage, shaped after the browser `Storage` API.
pub trait KeyValueStore {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// `HashMap`-backed store with switchable failure modes for tests.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    available: bool,
    read_only: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            available: true,
            read_only: false,
        }
    }

    /// A store that fails every operation, like storage in a locked-down
    /// private window.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// A store that can be read but rejects writes as if it were full.
    #[must_use]
    pub fn read_only(items: HashMap<String, String>) -> Self {
        Self {
            items,
            available: true,
            read_only: true,
        }
    }

    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    const fn check_available(&self) -> Result<(), StorageError> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        if self.read_only {
            return Err(StorageError::QuotaExceeded);
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        if self.read_only {
            return Err(StorageError::Backend("store is read-only".to_string()));
        }
        self.items.remove(key);
        Ok(())
    }
}

/// Synchronises a [`PreferenceState`] with a single storage slot.
///
/// `load`, `save` and `clear` never fail: persistence is best effort and a
/// broken store degrades to "no saved preferences". The `try_*` variants
/// expose the underlying error for callers that want it.
#[derive(Debug, Clone)]
pub struct PersistenceBridge<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn from_config(store: S, config: &A11yConfig) -> Self {
        Self::with_key(store, config.storage_key.clone())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored record, or `None` when nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read, the value is not JSON, or
    /// the JSON is not an object.
    pub fn try_load(&self) -> Result<Option<PreferenceState>, A11yError> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(record) => Ok(Some(PreferenceState::merged_onto_defaults(&record))),
            _ => Err(A11yError::NotAnObject),
        }
    }

    #[must_use]
    pub fn load(&self) -> PreferenceState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => PreferenceState::default(),
            Err(err) => {
                log::debug!("falling back to default accessibility preferences: {err}");
                PreferenceState::default()
            }
        }
    }

    /// Write the full record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or storage rejects the write.
    pub fn try_save(&mut self, state: &PreferenceState) -> Result<(), A11yError> {
        let raw = serde_json::to_string(state)?;
        self.store.set_item(&self.key, &raw)?;
        Ok(())
    }

    pub fn save(&mut self, state: &PreferenceState) {
        if let Err(err) = self.try_save(state) {
            log::warn!("accessibility preferences not saved: {err}");
        }
    }

    /// Remove the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be modified.
    pub fn try_clear(&mut self) -> Result<(), A11yError> {
        self.store.remove_item(&self.key)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Err(err) = self.try_clear() {
            log::warn!("accessibility preferences not cleared: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{FontStep, LetterSpacing, LineSpacing, PreferencePatch, PreferenceToggle};

    #[test]
    fn missing_key_loads_defaults() {
        let bridge = PersistenceBridge::new(MemoryStore::new());
        assert!(bridge.try_load().unwrap().is_none());
        assert!(bridge.load().is_default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut state = PreferenceState::default();
        state.apply_patch(
            &PreferencePatch::new()
                .font_step(3)
                .line_spacing(LineSpacing::Loose)
                .letter_spacing(LetterSpacing::Wider)
                .toggle(PreferenceToggle::EnhancedFocus, true)
                .toggle(PreferenceToggle::InvertColors, true),
        );
        let mut bridge = PersistenceBridge::new(MemoryStore::new());
        bridge.save(&state);
        assert_eq!(bridge.load(), state);
    }

    #[test]
    fn partial_record_merges_onto_defaults() {
        let store = MemoryStore::new().with_item(DEFAULT_STORAGE_KEY, r#"{"highContrast":true}"#);
        let loaded = PersistenceBridge::new(store).load();
        let mut expected = PreferenceState::default();
        expected.high_contrast = true;
        assert_eq!(loaded, expected);
    }

    #[test]
    fn invalid_json_loads_defaults() {
        let store = MemoryStore::new().with_item(DEFAULT_STORAGE_KEY, "{not json");
        let bridge = PersistenceBridge::new(store);
        assert!(matches!(bridge.try_load(), Err(A11yError::Json(_))));
        assert!(bridge.load().is_default());
    }

    #[test]
    fn non_object_json_loads_defaults() {
        for raw in ["[1,2]", "\"loose\"", "null", "4"] {
            let store = MemoryStore::new().with_item(DEFAULT_STORAGE_KEY, raw);
            let bridge = PersistenceBridge::new(store);
            assert!(matches!(bridge.try_load(), Err(A11yError::NotAnObject)));
            assert!(bridge.load().is_default());
        }
    }

    #[test]
    fn unavailable_storage_is_tolerated() {
        let mut bridge = PersistenceBridge::new(MemoryStore::unavailable());
        assert!(bridge.load().is_default());
        let mut state = PreferenceState::default();
        state.font_step = FontStep::MAX;
        bridge.save(&state);
        bridge.clear();
        assert!(matches!(
            bridge.try_save(&state),
            Err(A11yError::Storage(StorageError::Unavailable))
        ));
    }

    #[test]
    fn full_storage_drops_the_write() {
        let mut bridge = PersistenceBridge::new(MemoryStore::read_only(HashMap::new()));
        let mut state = PreferenceState::default();
        state.grayscale = true;
        bridge.save(&state);
        assert!(!bridge.store().contains_key(DEFAULT_STORAGE_KEY));
        assert!(bridge.load().is_default());
    }

    #[test]
    fn clear_removes_the_slot() {
        let mut bridge = PersistenceBridge::with_key(MemoryStore::new(), "custom.key");
        let mut state = PreferenceState::default();
        state.reduce_motion = true;
        bridge.save(&state);
        assert!(bridge.store().contains_key("custom.key"));
        bridge.clear();
        assert!(!bridge.store().contains_key("custom.key"));
        assert!(bridge.load().is_default());
    }

    #[test]
    fn save_overwrites_extra_fields() {
        let store = MemoryStore::new().with_item(
            DEFAULT_STORAGE_KEY,
            r#"{"grayscale":true,"legacyTheme":"dark"}"#,
        );
        let mut bridge = PersistenceBridge::new(store);
        let state = bridge.load();
        bridge.save(&state);
        let raw = bridge.store().raw(DEFAULT_STORAGE_KEY).unwrap();
        assert!(!raw.contains("legacyTheme"));
        assert!(raw.contains("\"grayscale\":true"));
    }
}
