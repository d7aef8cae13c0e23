#![cfg(target_arch = "wasm32")]

use tribal_a11y::{
    DEFAULT_STORAGE_KEY, KeyValueStore, MarkerTarget, PreferencePatch, PreferenceToggle, StyleMarker,
};
use tribal_web::a11y::{self, LocalStorageStore, RootElementTarget};
use tribal_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

fn clean_slate() {
    let mut store = LocalStorageStore;
    store.remove_item(DEFAULT_STORAGE_KEY).expect("clear slot");
    let root = dom::document_root().expect("html element");
    for marker in StyleMarker::ALL {
        root.class_list().remove_1(marker.class_name()).expect("remove marker");
    }
}

fn root_has(marker: StyleMarker) -> bool {
    RootElementTarget::new().has_marker(marker)
}

#[wasm_bindgen_test]
fn updates_mark_the_root_and_persist() {
    clean_slate();
    let mut toolbar = a11y::browser_toolbar();
    toolbar.hydrate();
    toolbar.update(&PreferencePatch::new().font_step(2).high_contrast(true));
    assert!(root_has(StyleMarker::FontStep2));
    assert!(root_has(StyleMarker::HighContrast));

    let raw = LocalStorageStore
        .get_item(DEFAULT_STORAGE_KEY)
        .expect("read slot")
        .expect("slot written");
    assert!(raw.contains("\"fontStep\":2"));
    assert!(raw.contains("\"highContrast\":true"));

    toolbar.reset();
    assert!(!root_has(StyleMarker::FontStep2));
    assert!(!root_has(StyleMarker::HighContrast));
    assert_eq!(LocalStorageStore.get_item(DEFAULT_STORAGE_KEY), Ok(None));
}

#[wasm_bindgen_test]
fn saved_preferences_apply_before_render() {
    clean_slate();
    let mut store = LocalStorageStore;
    store
        .set_item(DEFAULT_STORAGE_KEY, r#"{"grayscale":true,"lineSpacing":"loose"}"#)
        .expect("seed slot");
    a11y::apply_saved_preferences();
    assert!(root_has(StyleMarker::Grayscale));
    assert!(root_has(StyleMarker::LineLoose));
    assert!(!root_has(StyleMarker::HighContrast));
    clean_slate();
}

#[wasm_bindgen_test]
fn corrupt_slot_leaves_the_page_unstyled() {
    clean_slate();
    let mut store = LocalStorageStore;
    store.set_item(DEFAULT_STORAGE_KEY, "{not json").expect("seed slot");
    a11y::apply_saved_preferences();
    assert!(StyleMarker::ALL.into_iter().all(|marker| !root_has(marker)));
    clean_slate();
}

#[wasm_bindgen_test]
async fn trigger_opens_the_panel_and_switch_flips_a_preference() {
    clean_slate();
    tribal_web::i18n::set_lang("en");
    let doc = dom::document().expect("document");
    let host = doc.create_element("div").expect("create host");
    doc.body().expect("body").append_child(&host).expect("append host");
    Renderer::<tribal_web::components::accessibility_toolbar::AccessibilityToolbar>::with_root(host.clone())
        .render();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    let trigger: HtmlElement = doc
        .get_element_by_id("a11y-toolbar-trigger")
        .expect("trigger")
        .dyn_into()
        .expect("button");
    trigger.click();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;
    assert!(doc.get_element_by_id("a11y-panel").is_some());

    let id = format!("a11y-toggle-{}", PreferenceToggle::HighlightLinks.key());
    let switch: HtmlElement = doc
        .get_element_by_id(&id)
        .expect("switch")
        .dyn_into()
        .expect("input");
    switch.click();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;
    assert!(root_has(StyleMarker::HighlightLinks));
    assert!(host.query_selector("[data-testid='a11y-modified']").expect("query").is_some());
    let status = doc.get_element_by_id(a11y::STATUS_REGION_ID).expect("live region");
    assert_eq!(status.text_content().unwrap_or_default(), "Highlight links on");

    host.remove();
    clean_slate();
}
