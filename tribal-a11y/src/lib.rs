//! Tribal Research Institute accessibility engine
//!
//! Platform-agnostic core of the site's accessibility toolbar: the visitor's
//! display preferences, the style markers they imply, best-effort persistence
//! and the controller that ties them together. Browser bindings live in
//! `tribal-web`.

pub mod config;
pub mod error;
pub mod markers;
pub mod prefs;
pub mod storage;
pub mod toolbar;

pub use config::A11yConfig;
pub use error::{A11yError, StorageError};
pub use markers::{MarkerSet, MarkerTarget, MemoryTarget, StyleMarker, apply_state, markers_for};
pub use prefs::{
    FONT_SCALE_PERCENT, FontStep, LetterSpacing, LineSpacing, MAX_FONT_STEP, PreferencePatch,
    PreferenceState, PreferenceToggle,
};
pub use storage::{DEFAULT_STORAGE_KEY, KeyValueStore, MemoryStore, PersistenceBridge};
pub use toolbar::{Toolbar, Visibility};

/// Build a toolbar over `target` and `store` using the slot from `config`.
pub fn toolbar_from_config<T, S>(target: T, store: S, config: &A11yConfig) -> Toolbar<T, S>
where
    T: MarkerTarget,
    S: KeyValueStore,
{
    Toolbar::new(target, PersistenceBridge::from_config(store, config))
}
