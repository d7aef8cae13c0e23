use crate::markers::{MarkerTarget, apply_state};
use crate::prefs::{LetterSpacing, LineSpacing, PreferencePatch, PreferenceState, PreferenceToggle};
use crate::storage::{KeyValueStore, PersistenceBridge};

/// Whether the toolbar panel is showing. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Owner of the visitor's display preferences.
///
/// Every preference change goes through [`Toolbar::update`] or
/// [`Toolbar::reset`]. Once hydrated, each change re-applies the style
/// markers on the target and then writes the record to storage. Before
/// [`Toolbar::hydrate`] has run nothing is applied or written, so a transient
/// default record can never overwrite a real saved one.
#[derive(Debug)]
pub struct Toolbar<T, S> {
    target: T,
    bridge: PersistenceBridge<S>,
    state: PreferenceState,
    visibility: Visibility,
    hydrated: bool,
}

impl<T: MarkerTarget, S: KeyValueStore> Toolbar<T, S> {
    pub fn new(target: T, bridge: PersistenceBridge<S>) -> Self {
        Self {
            target,
            bridge,
            state: PreferenceState::default(),
            visibility: Visibility::Closed,
            hydrated: false,
        }
    }

    /// Load the saved record and apply it. Runs once; later calls return the
    /// current state untouched.
    pub fn hydrate(&mut self) -> PreferenceState {
        if self.hydrated {
            return self.state;
        }
        if !self.state.is_default() {
            log::debug!("discarding preference changes made before hydration");
        }
        self.state = self.bridge.load();
        apply_state(&mut self.target, &self.state);
        self.hydrated = true;
        self.state
    }

    pub fn update(&mut self, patch: &PreferencePatch) -> PreferenceState {
        self.state.apply_patch(patch);
        if self.hydrated {
            apply_state(&mut self.target, &self.state);
            self.bridge.save(&self.state);
        }
        self.state
    }

    /// Back to defaults: clears the stored record and every marker.
    pub fn reset(&mut self) -> PreferenceState {
        self.state.reset();
        if self.hydrated {
            self.bridge.clear();
            apply_state(&mut self.target, &self.state);
            log::info!("accessibility preferences reset");
        }
        self.state
    }

    pub fn increase_font(&mut self) -> PreferenceState {
        let next = self.state.font_step.increase();
        self.update(&PreferencePatch::new().font_step(i32::from(next.get())))
    }

    pub fn decrease_font(&mut self) -> PreferenceState {
        let next = self.state.font_step.decrease();
        self.update(&PreferencePatch::new().font_step(i32::from(next.get())))
    }

    pub fn set_line_spacing(&mut self, spacing: LineSpacing) -> PreferenceState {
        self.update(&PreferencePatch::new().line_spacing(spacing))
    }

    pub fn set_letter_spacing(&mut self, spacing: LetterSpacing) -> PreferenceState {
        self.update(&PreferencePatch::new().letter_spacing(spacing))
    }

    pub fn set_toggle(&mut self, toggle: PreferenceToggle, value: bool) -> PreferenceState {
        self.update(&PreferencePatch::new().toggle(toggle, value))
    }

    pub fn flip_toggle(&mut self, toggle: PreferenceToggle) -> PreferenceState {
        let next = !self.state.toggle_value(toggle);
        self.set_toggle(toggle, next)
    }

    pub const fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    pub const fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    /// Close the panel (backdrop click, Escape or the close button).
    pub const fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    #[must_use]
    pub const fn state(&self) -> &PreferenceState {
        &self.state
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.state.is_default()
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub const fn bridge(&self) -> &PersistenceBridge<S> {
        &self.bridge
    }
}
