use crate::i18n::t;
use bridgetales_core::Overlay;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub overlays: Vec<Overlay>,
    /// Fired when the reader taps a prompt; opens the nearby search.
    pub on_select: Callback<()>,
}

#[function_component(Overlays)]
pub fn overlays(p: &Props) -> Html {
    let items = p.overlays.iter().map(|overlay| {
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        html! {
            <button
                class={classes!("story-overlay", overlay.category.css_class(), overlay.slot.css_class())}
                {onclick}
            >
                <span class="overlay-icon" aria-hidden="true">{ overlay.category.icon() }</span>
                <span class="overlay-text">{ overlay.prompt() }</span>
            </button>
        }
    });
    html! {
        <div class="story-overlays" role="group" aria-label={t("overlay.label")}>
            { for items }
        </div>
    }
}
