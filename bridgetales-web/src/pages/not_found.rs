use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(p: &Props) -> Html {
    let go_home = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(Route::Home))
    };
    html! {
        <section class="not-found">
            <h2>{ t("not_found.title") }</h2>
            <button onclick={go_home}>{ t("not_found.back") }</button>
        </section>
    }
}
