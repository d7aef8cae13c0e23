// Accessibility helpers and browser bindings for the preference engine

use std::fmt::Write as _;

use tribal_a11y::{
    A11yConfig, FontStep, KeyValueStore, MarkerTarget, StorageError, StyleMarker, Toolbar,
    toolbar_from_config,
};
use web_sys::{Element, Storage};

/// Id of the polite live region the toolbar announces changes through.
pub const STATUS_REGION_ID: &str = "a11y-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #1d70b8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Stylesheet giving each style marker its visual effect.
#[must_use]
pub fn marker_css(config: &A11yConfig) -> String {
    let mut css = String::new();
    for step in FontStep::ALL {
        if let Some(marker) = StyleMarker::for_font_step(step) {
            let _ = write!(
                css,
                "html.{}{{font-size:{}%}}",
                marker.class_name(),
                config.font_scale(step)
            );
        }
    }
    let rules = [
        (StyleMarker::LineRelaxed, " body{line-height:1.8}"),
        (StyleMarker::LineLoose, " body{line-height:2.2}"),
        (StyleMarker::LetterWide, " body{letter-spacing:0.05em;word-spacing:0.1em}"),
        (StyleMarker::LetterWider, " body{letter-spacing:0.12em;word-spacing:0.2em}"),
        (
            StyleMarker::HighContrast,
            " body{background:#000;color:#fff} html.a11y-high-contrast a{color:#ff0}",
        ),
        (StyleMarker::Grayscale, "{filter:grayscale(100%)}"),
        (StyleMarker::InvertColors, " body{filter:invert(1) hue-rotate(180deg)}"),
        (
            StyleMarker::HighlightLinks,
            " a{text-decoration:underline !important;background:#ffdd00;color:#0b0c0c !important}",
        ),
        (
            StyleMarker::EnhancedFocus,
            " :focus{outline:4px solid #ffdd00 !important;outline-offset:3px;box-shadow:0 0 0 7px #0b0c0c}",
        ),
        (
            StyleMarker::ReduceMotion,
            " *,html.a11y-reduce-motion *::before,html.a11y-reduce-motion *::after{animation-duration:0.01ms !important;animation-iteration-count:1 !important;transition-duration:0.01ms !important;scroll-behavior:auto !important}",
        ),
    ];
    for (marker, rule) in rules {
        let _ = write!(css, "html.{}{rule}", marker.class_name());
    }
    css
}

/// Announce a message to screen readers through the toolbar's live region.
///
/// The region is emptied first so repeating the same message is read again.
pub fn announce(msg: &str) {
    if let Some(node) = crate::dom::element_by_id(STATUS_REGION_ID) {
        node.set_text_content(None);
        node.set_text_content(Some(msg));
    }
}

/// The document's `<html>` element as a marker target.
///
/// Without a document (server-side rendering) every operation is a no-op.
#[derive(Debug, Clone, Default)]
pub struct RootElementTarget {
    root: Option<Element>,
}

impl RootElementTarget {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: crate::dom::document_root(),
        }
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.root.is_some()
    }
}

impl MarkerTarget for RootElementTarget {
    fn add_marker(&mut self, marker: StyleMarker) {
        if let Some(root) = &self.root {
            let _ = root.class_list().add_1(marker.class_name());
        }
    }

    fn remove_marker(&mut self, marker: StyleMarker) {
        if let Some(root) = &self.root {
            let _ = root.class_list().remove_1(marker.class_name());
        }
    }

    fn has_marker(&self, marker: StyleMarker) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.class_list().contains(marker.class_name()))
    }
}

/// Browser `localStorage` as a [`KeyValueStore`].
///
/// The handle is looked up on every call: access can be revoked while the
/// page is open, and a missing handle simply reports [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, StorageError> {
        crate::dom::local_storage().map_err(|err| {
            log::debug!("localStorage unavailable: {err}");
            StorageError::Unavailable
        })
    }
}

fn storage_error(err: &wasm_bindgen::JsValue) -> StorageError {
    let message = crate::dom::js_error_message(err);
    if message.contains("Quota") || message.contains("quota") {
        StorageError::QuotaExceeded
    } else {
        StorageError::Backend(message)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| storage_error(&err))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| storage_error(&err))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| storage_error(&err))
    }
}

pub type BrowserToolbar = Toolbar<RootElementTarget, LocalStorageStore>;

/// Toolbar bound to the live document and `localStorage`, not yet hydrated.
#[must_use]
pub fn browser_toolbar() -> BrowserToolbar {
    toolbar_from_config(
        RootElementTarget::new(),
        LocalStorageStore,
        &A11yConfig::default_config(),
    )
}

/// Apply saved preferences to `<html>` before the app first renders.
pub fn apply_saved_preferences() {
    let mut toolbar = browser_toolbar();
    let state = toolbar.hydrate();
    log::debug!("applied saved accessibility preferences: {state:?}");
}
