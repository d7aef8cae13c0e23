use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer role="contentinfo" class="site-footer">
            <p>{ t("footer.copyright") }</p>
        </footer>
    }
}
