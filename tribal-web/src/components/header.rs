use crate::i18n::{locales, set_lang, t};
use crate::paths::asset_path;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                let lang = sel.value();
                set_lang(&lang);
                cb.emit(lang);
            }
        })
    };
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only skip-link">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-brand">
                    <img src={asset_path("static/assets/img/emblem.svg")} alt={t("site.emblem_alt")} width="48" height="48" />
                    <div>
                        <p class="site-title">{ t("site.title") }</p>
                        <p class="site-subtitle">{ t("site.subtitle") }</p>
                    </div>
                </div>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}
