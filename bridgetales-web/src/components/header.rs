use crate::i18n::{t, tr1};
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub reader_name: Option<AttrValue>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let links = Route::NAV.iter().map(|(route, key)| {
        let active = *route == p.current;
        let onclick = {
            let cb = p.on_navigate.clone();
            let route = route.clone();
            Callback::from(move |_: MouseEvent| cb.emit(route.clone()))
        };
        html! {
            <button
                class={classes!("nav-link", active.then_some("active"))}
                aria-current={active.then_some("page")}
                {onclick}
            >
                { t(key) }
            </button>
        }
    });
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-left">
                    <h1 class="app-title">{ t("app.title") }</h1>
                    <p class="tagline">{ t("app.tagline") }</p>
                </div>
                <nav class="header-right" aria-label={t("nav.label")}>
                    { for links }
                    if let Some(name) = p.reader_name.as_ref() {
                        <span class="reader-name">{ tr1("profile.signed_in", "name", name) }</span>
                    }
                </nav>
            </div>
        </header>
    }
}
