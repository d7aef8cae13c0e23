use crate::i18n::t;
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <section class="panel home">
            <h1>{ t("home.heading") }</h1>
            <p>{ t("home.intro") }</p>
            <p class="home__hint">{ t("home.a11y_hint") }</p>
        </section>
    }
}
