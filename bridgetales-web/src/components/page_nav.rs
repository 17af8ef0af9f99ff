use crate::i18n::t;
use bridgetales_core::{Direction, PageNavigation};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub nav: PageNavigation,
    pub on_navigate: Callback<Direction>,
}

#[function_component(PageNav)]
pub fn page_nav(p: &Props) -> Html {
    let go = |direction: Direction| {
        let cb = p.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(direction))
    };
    html! {
        <nav class="page-nav" aria-label={t("pager.label")}>
            <button id="prev-page" disabled={!p.nav.can_go_back} onclick={go(Direction::Previous)}>
                { t("pager.prev") }
            </button>
            <span class="page-indicator">{ p.nav.indicator.clone() }</span>
            <button id="next-page" disabled={!p.nav.can_go_forward} onclick={go(Direction::Next)}>
                { t("pager.next") }
            </button>
        </nav>
    }
}
