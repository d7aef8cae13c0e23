//! Thin accessors for browser globals.
//!
//! Off the browser (server-side rendering, native tests) every accessor
//! returns `None` rather than touching the JavaScript bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

/// The global `window`, when running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The `<html>` element, which carries the accessibility markers.
#[must_use]
pub fn document_root() -> Option<Element> {
    document().and_then(|doc| doc.document_element())
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// The browser `localStorage` handle.
///
/// # Errors
/// Returns a description of the failure when there is no window, access is
/// refused (for example by privacy settings) or storage does not exist.
pub fn local_storage() -> Result<Storage, String> {
    window()
        .ok_or_else(|| String::from("window unavailable"))?
        .local_storage()
        .map_err(|err| js_error_message(&err))?
        .ok_or_else(|| String::from("localStorage unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
