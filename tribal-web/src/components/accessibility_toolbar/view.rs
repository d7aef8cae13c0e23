use tribal_a11y::PreferenceToggle;
use yew::prelude::*;

use super::controls::{
    font_size_group, letter_spacing_group, line_spacing_group, reset_button, toggle_switch,
};
use super::focus::{keydown_handler, use_focus_management};
use super::hook::use_accessibility_toolbar;
use crate::a11y::STATUS_REGION_ID;
use crate::i18n::t;

pub const TRIGGER_ID: &str = "a11y-toolbar-trigger";
pub const PANEL_ID: &str = "a11y-panel";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Render with the panel already open.
    #[prop_or_default]
    pub start_open: bool,
}

#[function_component(AccessibilityToolbar)]
pub fn accessibility_toolbar(p: &Props) -> Html {
    let handle = use_accessibility_toolbar(p.start_open);
    let panel_ref = use_node_ref();
    let open = handle.is_open();
    let modified = !handle.state().is_default();

    use_focus_management(open, panel_ref.clone());

    let on_trigger = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            handle.toggle_visibility();
        })
    };
    let on_close = {
        let handle = handle.clone();
        Callback::from(move |()| handle.close())
    };
    let on_close_click = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let panel = if open {
        let on_keydown = keydown_handler(panel_ref.clone(), on_close);
        html! {
            <>
                <div class="a11y-backdrop" data-testid="a11y-backdrop" onclick={on_close_click.clone()}></div>
                <div
                    id={PANEL_ID}
                    class="a11y-panel"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="a11y-panel-title"
                    ref={panel_ref}
                    onkeydown={on_keydown}
                >
                    <div class="a11y-panel__header">
                        <h2 id="a11y-panel-title">{ t("a11y.title") }</h2>
                        <button
                            type="button"
                            class="a11y-panel__close"
                            aria-label={t("a11y.close")}
                            onclick={on_close_click}
                        >{ "×" }</button>
                    </div>
                    <div class="a11y-panel__body">
                        { font_size_group(&handle) }
                        { line_spacing_group(&handle) }
                        { letter_spacing_group(&handle) }
                        <fieldset class="a11y-group a11y-toggles" data-testid="a11y-toggles">
                            <legend class="sr-only">{ t("a11y.title") }</legend>
                            { for PreferenceToggle::ALL.into_iter().map(|toggle| toggle_switch(&handle, toggle)) }
                        </fieldset>
                    </div>
                    <div class="a11y-panel__footer">
                        { reset_button(&handle) }
                    </div>
                </div>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="a11y-toolbar">
            <button
                type="button"
                id={TRIGGER_ID}
                class="a11y-trigger"
                aria-label={t("a11y.open")}
                aria-expanded={open.to_string()}
                aria-controls={PANEL_ID}
                aria-haspopup="dialog"
                onclick={on_trigger}
            >
                <span aria-hidden="true">{ "♿" }</span>
                if modified {
                    <span class="a11y-trigger__badge" data-testid="a11y-modified" title={t("a11y.modified")}>
                        <span class="sr-only">{ t("a11y.modified") }</span>
                    </span>
                }
            </button>
            { panel }
            <div id={STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite" aria-atomic="true"></div>
        </div>
    }
}
