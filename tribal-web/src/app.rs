use crate::components::accessibility_toolbar::AccessibilityToolbar;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use tribal_a11y::A11yConfig;
use yew::prelude::*;
use yew_router::prelude::*;

/// Top-level component mounted on the page: the browser router around
/// [`AppInner`].
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

/// Site shell: header, routed content, footer and the accessibility toolbar.
///
/// Must be rendered inside a router.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let current_lang = use_state(crate::i18n::current_lang);
    let marker_css = use_memo((), |_| crate::a11y::marker_css(&A11yConfig::default_config()));

    let on_lang_change = {
        let current_lang = current_lang.clone();
        Callback::from(move |lang: String| current_lang.set(lang))
    };

    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <style>{ (*marker_css).clone() }</style>
            <Header {on_lang_change} current_lang={(*current_lang).clone()} />
            <main id="main" role="main" tabindex="-1">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <AccessibilityToolbar />
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
