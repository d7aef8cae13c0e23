use std::collections::BTreeMap;

use tribal_a11y::{FontStep, LetterSpacing, LineSpacing, PreferenceToggle};
use yew::prelude::*;

use super::hook::ToolbarHandle;
use crate::a11y::announce;
use crate::i18n::{fmt_pct, t, tr};

#[must_use]
pub const fn toggle_label_key(toggle: PreferenceToggle) -> &'static str {
    match toggle {
        PreferenceToggle::HighContrast => "a11y.toggles.high_contrast",
        PreferenceToggle::Grayscale => "a11y.toggles.grayscale",
        PreferenceToggle::InvertColors => "a11y.toggles.invert_colors",
        PreferenceToggle::HighlightLinks => "a11y.toggles.highlight_links",
        PreferenceToggle::EnhancedFocus => "a11y.toggles.enhanced_focus",
        PreferenceToggle::ReduceMotion => "a11y.toggles.reduce_motion",
    }
}

fn toggle_dom_id(toggle: PreferenceToggle) -> String {
    format!("a11y-toggle-{}", toggle.key())
}

fn announce_font(step: FontStep) {
    let readout = fmt_pct(step.scale_percent());
    let mut vars = BTreeMap::new();
    vars.insert("value", readout.as_str());
    announce(&tr("a11y.announce.font", Some(&vars)));
}

fn announce_choice(setting_key: &str, value_key: &str) {
    let setting = t(setting_key);
    let value = t(value_key);
    let mut vars = BTreeMap::new();
    vars.insert("setting", setting.as_str());
    vars.insert("value", value.as_str());
    announce(&tr("a11y.announce.changed", Some(&vars)));
}

pub fn font_size_group(handle: &ToolbarHandle) -> Html {
    let step = handle.state().font_step;
    let on_decrease = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| announce_font(handle.decrease_font().font_step))
    };
    let on_increase = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| announce_font(handle.increase_font().font_step))
    };

    html! {
        <fieldset class="a11y-group a11y-font" data-testid="a11y-font-group">
            <legend>{ t("a11y.font_size") }</legend>
            <div class="a11y-font__controls">
                <button
                    type="button"
                    id="a11y-font-decrease"
                    aria-label={t("a11y.font_decrease")}
                    disabled={step == FontStep::BASELINE}
                    onclick={on_decrease}
                >{ "A−" }</button>
                <output class="a11y-font__readout" aria-live="off" data-step={step.get().to_string()}>
                    { fmt_pct(step.scale_percent()) }
                </output>
                <button
                    type="button"
                    id="a11y-font-increase"
                    aria-label={t("a11y.font_increase")}
                    disabled={step == FontStep::MAX}
                    onclick={on_increase}
                >{ "A+" }</button>
            </div>
        </fieldset>
    }
}

struct RadioOption {
    key: &'static str,
    checked: bool,
    onclick: Callback<MouseEvent>,
}

fn radio_group(name: &'static str, legend_key: &'static str, options: Vec<RadioOption>) -> Html {
    html! {
        <fieldset class="a11y-group a11y-radio-group" data-testid={name}>
            <legend>{ t(legend_key) }</legend>
            { for options.into_iter().map(|option| {
                let id = format!("{name}-{}", option.key);
                html! {
                    <label for={id.clone()} class="a11y-radio">
                        <input
                            type="radio"
                            id={id.clone()}
                            name={name}
                            value={option.key}
                            checked={option.checked}
                            onclick={option.onclick}
                        />
                        <span>{ t(&format!("a11y.spacing.{}", option.key)) }</span>
                    </label>
                }
            }) }
        </fieldset>
    }
}

pub fn line_spacing_group(handle: &ToolbarHandle) -> Html {
    let current = handle.state().line_spacing;
    let options = LineSpacing::ALL
        .into_iter()
        .map(|spacing| {
            let handle = handle.clone();
            RadioOption {
                key: spacing.key(),
                checked: spacing == current,
                onclick: Callback::from(move |_: MouseEvent| {
                    handle.set_line_spacing(spacing);
                    announce_choice(
                        "a11y.line_spacing",
                        &format!("a11y.spacing.{}", spacing.key()),
                    );
                }),
            }
        })
        .collect();
    radio_group("a11y-line-spacing", "a11y.line_spacing", options)
}

pub fn letter_spacing_group(handle: &ToolbarHandle) -> Html {
    let current = handle.state().letter_spacing;
    let options = LetterSpacing::ALL
        .into_iter()
        .map(|spacing| {
            let handle = handle.clone();
            RadioOption {
                key: spacing.key(),
                checked: spacing == current,
                onclick: Callback::from(move |_: MouseEvent| {
                    handle.set_letter_spacing(spacing);
                    announce_choice(
                        "a11y.letter_spacing",
                        &format!("a11y.spacing.{}", spacing.key()),
                    );
                }),
            }
        })
        .collect();
    radio_group("a11y-letter-spacing", "a11y.letter_spacing", options)
}

pub fn toggle_switch(handle: &ToolbarHandle, toggle: PreferenceToggle) -> Html {
    let on = handle.state().toggle_value(toggle);
    let id = toggle_dom_id(toggle);
    let onclick = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            let next = handle.flip_toggle(toggle).toggle_value(toggle);
            let setting = t(toggle_label_key(toggle));
            let mut vars = BTreeMap::new();
            vars.insert("setting", setting.as_str());
            let key = if next {
                "a11y.announce.enabled"
            } else {
                "a11y.announce.disabled"
            };
            announce(&tr(key, Some(&vars)));
        })
    };

    html! {
        <div class="a11y-switch">
            <input
                id={id.clone()}
                type="checkbox"
                role="switch"
                aria-checked={on.to_string()}
                checked={on}
                {onclick}
            />
            <label for={id}>{ t(toggle_label_key(toggle)) }</label>
        </div>
    }
}

pub fn reset_button(handle: &ToolbarHandle) -> Html {
    let is_default = handle.state().is_default();
    let onclick = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            handle.reset();
            announce(&t("a11y.announce.reset"));
        })
    };
    html! {
        <button
            type="button"
            id="a11y-reset"
            class="a11y-reset"
            disabled={is_default}
            {onclick}
        >{ t("a11y.reset") }</button>
    }
}
