use crate::i18n::{t, tr};
use crate::router::Route;
use std::collections::BTreeMap;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();
    let path = location.map_or_else(String::new, |loc| loc.path().to_string());
    let mut vars = BTreeMap::new();
    vars.insert("path", path.as_str());

    html! {
        <section class="panel not-found" aria-labelledby="not-found-title">
            <h1 id="not-found-title">{ t("not_found.title") }</h1>
            <p class="not-found__path">{ tr("not_found.requested", Some(&vars)) }</p>
            <p>{ t("not_found.message") }</p>
            <Link<Route> to={Route::Home} classes={classes!("not-found__home")}>
                { t("not_found.back") }
            </Link<Route>>
        </section>
    }
}
