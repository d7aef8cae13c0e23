use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::hook;
use yew::prelude::*;

const FOCUSABLE_QUERY: &str =
    "button:not([disabled]), [href], input:not([disabled]), select, textarea, [tabindex]:not([tabindex='-1'])";

fn focusable_in(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Move focus into the panel when it opens and hand it back to whatever had
/// focus before (the trigger button) when it closes.
#[hook]
pub fn use_focus_management(open: bool, panel_ref: NodeRef) {
    use_effect_with((open, panel_ref), move |(open, panel_ref)| {
        let mut prev_focus: Option<web_sys::HtmlElement> = None;
        if cfg!(target_arch = "wasm32") && *open {
            prev_focus = crate::dom::document()
                .and_then(|doc| doc.active_element())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(first) = panel_ref
                .cast::<web_sys::Element>()
                .and_then(|panel| focusable_in(&panel).into_iter().next())
            {
                let _ = first.focus();
            }
        }
        move || {
            if let Some(el) = prev_focus {
                let _ = el.focus();
            }
        }
    });
}

/// Escape closes the panel; Tab and Shift+Tab wrap inside it.
pub fn keydown_handler(panel_ref: NodeRef, on_close: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            let _ = e;
            return;
        }
        if e.key() == "Escape" {
            e.prevent_default();
            on_close.emit(());
            return;
        }
        if e.key() != "Tab" {
            return;
        }
        let Some(panel) = panel_ref.cast::<web_sys::Element>() else {
            return;
        };
        let focusable = focusable_in(&panel);
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return;
        };
        let Some(active) = crate::dom::document().and_then(|doc| doc.active_element()) else {
            return;
        };
        if !panel.contains(Some(&active)) {
            e.prevent_default();
            let _ = first.focus();
            return;
        }
        let first_el: &web_sys::Element = first.unchecked_ref();
        let last_el: &web_sys::Element = last.unchecked_ref();
        if e.shift_key() && active == *first_el {
            e.prevent_default();
            let _ = last.focus();
        } else if !e.shift_key() && active == *last_el {
            e.prevent_default();
            let _ = first.focus();
        }
    })
}
