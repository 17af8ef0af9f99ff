use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: u64,
    pub message: AttrValue,
    pub on_dismiss: Callback<u64>,
}

/// Dismissable failure message. The app removes it after a delay as well.
#[function_component(ErrorBanner)]
pub fn error_banner(p: &Props) -> Html {
    let on_click = {
        let cb = p.on_dismiss.clone();
        let id = p.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    html! {
        <div class="error-banner" role="alert">
            <span class="error-message">{ p.message.clone() }</span>
            <button class="error-dismiss" aria-label={t("error.dismiss")} onclick={on_click}>
                { "\u{00d7}" }
            </button>
        </div>
    }
}
