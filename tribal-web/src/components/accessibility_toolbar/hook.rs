use std::cell::RefCell;
use std::rc::Rc;

use tribal_a11y::{
    LetterSpacing, LineSpacing, PreferencePatch, PreferenceState, PreferenceToggle, Visibility,
};
use yew::prelude::*;

use crate::a11y::{BrowserToolbar, browser_toolbar};

/// Shared access to the page's toolbar controller.
///
/// Mutations go straight to the controller, which applies markers and saves
/// before returning; the component is then re-rendered from the new state.
#[derive(Clone)]
pub struct ToolbarHandle {
    controller: Rc<RefCell<BrowserToolbar>>,
    refresh: UseForceUpdateHandle,
}

impl ToolbarHandle {
    fn with<R>(&self, f: impl FnOnce(&mut BrowserToolbar) -> R) -> R {
        let out = f(&mut *self.controller.borrow_mut());
        self.refresh.force_update();
        out
    }

    #[must_use]
    pub fn state(&self) -> PreferenceState {
        *self.controller.borrow().state()
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.controller.borrow().visibility()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    pub fn update(&self, patch: &PreferencePatch) -> PreferenceState {
        self.with(|toolbar| toolbar.update(patch))
    }

    pub fn increase_font(&self) -> PreferenceState {
        self.with(BrowserToolbar::increase_font)
    }

    pub fn decrease_font(&self) -> PreferenceState {
        self.with(BrowserToolbar::decrease_font)
    }

    pub fn set_line_spacing(&self, spacing: LineSpacing) -> PreferenceState {
        self.with(|toolbar| toolbar.set_line_spacing(spacing))
    }

    pub fn set_letter_spacing(&self, spacing: LetterSpacing) -> PreferenceState {
        self.with(|toolbar| toolbar.set_letter_spacing(spacing))
    }

    pub fn flip_toggle(&self, toggle: PreferenceToggle) -> PreferenceState {
        self.with(|toolbar| toolbar.flip_toggle(toggle))
    }

    pub fn reset(&self) -> PreferenceState {
        self.with(BrowserToolbar::reset)
    }

    pub fn toggle_visibility(&self) -> Visibility {
        self.with(BrowserToolbar::toggle_visibility)
    }

    pub fn close(&self) {
        self.with(BrowserToolbar::close);
    }
}

/// Controller for the accessibility toolbar, hydrated during the first render
/// so the initial paint already reflects saved preferences.
#[hook]
pub fn use_accessibility_toolbar(start_open: bool) -> ToolbarHandle {
    let controller = use_mut_ref(move || {
        let mut toolbar = browser_toolbar();
        toolbar.hydrate();
        if start_open {
            toolbar.open();
        }
        toolbar
    });
    let refresh = use_force_update();
    ToolbarHandle {
        controller,
        refresh,
    }
}
